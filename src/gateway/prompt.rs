//! Instruction builders for every request shape sent to the text-generation
//! provider.

use crate::project::model::{CharacterBible, CinematicStyle, ProjectSettings, SceneData};

/// System instruction for full-script generation.
pub const SCRIPT_SYSTEM_PROMPT: &str = "You are a creative AI screenwriter assistant specializing in visual storytelling. You prioritize character consistency above all else.";

/// System instruction for storyboard deconstruction.
pub const STORYBOARD_SYSTEM_PROMPT: &str = "You are an expert AI Video Prompt Engineer. You create precise, high-fidelity prompts for Google VEO 3.";

/// A script longer than this is treated as real source material and preferred
/// over the one-line idea.
const SCRIPT_SOURCE_THRESHOLD: usize = 50;

pub fn suggest_title_prompt(settings: &ProjectSettings) -> String {
    format!(
        "Create a short, catchy, cinematic title (English) for a {} video.\n\
         Context: {}\n\
         Idea: {}\n\
         Return ONLY the title, no quotes.",
        settings.style, settings.context, settings.video_idea
    )
}

pub fn suggest_context_prompt(style: CinematicStyle) -> String {
    format!(
        "Write a detailed, atmospheric visual context setting description (Vietnamese) for a {} video.\n\
         Focus on environment, lighting, and textures. Max 2 sentences.",
        style
    )
}

pub fn suggest_idea_prompt(settings: &ProjectSettings) -> String {
    format!(
        "Write a compelling, short video concept/plot summary (Vietnamese) for a {} video set in: {}.\n\
         Focus on conflict or mystery. Max 2 sentences.",
        settings.style, settings.context
    )
}

/// Long-form film treatment request. Demands strict adherence to the bible
/// and pacing that splits into exactly `scene_count` ~8-second scenes.
pub fn script_prompt(settings: &ProjectSettings, bible: &CharacterBible) -> String {
    format!(
        r#"Role: Master Cinematic Storyteller.
Task: Write a vivid, high-quality film treatment (long-form story) based on the user's concept.

PROJECT SETTINGS:
- Title: {title}
- Context/World: {context}
- Core Concept: {idea}
- Genre/Style: {style}

CHARACTER BIBLE (STRICT ADHERENCE REQUIRED):
{bible}

CRITICAL INSTRUCTION ON CHARACTERS:
You must maintain strict consistency with the provided Character Bible from the beginning to the very end of the story.
- Do not change their physical appearance, age, or defined personality traits.
- Do not add random characters unless necessary for background.
- Every action they take must align with the Character Bible provided.

INSTRUCTIONS:
1. Narrative Flow: Write a linear, engaging story that connects the concept into a sequence of events.
2. Visual Focus: Focus intensely on atmosphere, lighting, physical actions, and expressions. Show, don't tell.
3. Pacing: The story must be paced to be split into exactly {count} distinct scenes (approx 8 seconds each).
4. Character Integration: Weave the specific visual details from the Character Bible (outfits, features) into the action naturally.
5. Output Language: English.

FORMAT:
Return a cohesive story text (paragraphs) suitable for a director to read. Do not use "Scene 1" headers yet; just the narrative."#,
        title = settings.title.as_deref().unwrap_or("Untitled"),
        context = settings.context,
        idea = settings.video_idea,
        style = settings.style,
        bible = bible.english,
        count = settings.scene_count,
    )
}

fn field_instructions(style: CinematicStyle) -> &'static str {
    if style.is_stop_motion() {
        r#"SPECIAL FORMATTING FOR STOP MOTION / TOY STYLE:
For 'descriptionEn', you MUST structure the text EXACTLY like this (with line breaks):
Objects: [List main objects in scene]
Atmosphere: [Mood/Atmosphere]
SFX: [Sound Effects]

For 'lighting', describe the visual style (e.g. Playful, whimsical, warm lighting).
For 'action', describe the animation movement."#
    } else {
        r#"FIELD INSTRUCTIONS:
- descriptionEn: Cinematic visual description (English). Focus on what is seen.
- descriptionVi: Cinematic visual description (Vietnamese). High quality translation.
- camera: Technical camera movement (e.g., "Slow push-in," "Handheld tracking").
- lighting: Mood and lighting setup.
- action: Specific movement occurring within the 8s timeframe."#
    }
}

/// Storyboard deconstruction request. Prefers the full script as source
/// material once it carries real content, otherwise the core idea.
pub fn storyboard_prompt(settings: &ProjectSettings, bible: &CharacterBible) -> String {
    let source_material = if settings.script.len() > SCRIPT_SOURCE_THRESHOLD {
        format!("FULL NARRATIVE SCRIPT: {}", settings.script)
    } else {
        format!("CORE IDEA: {}", settings.video_idea)
    };

    format!(
        r#"Role: VEO 3 Prompt Architect & Director.
Task: Deconstruct the provided SOURCE MATERIAL into a precise {count}-scene storyboard.

SOURCE MATERIAL:
{source}

CONTEXT & STYLE:
Title: {title}
Context: {context}
Style: {style}

CHARACTER BIBLE (REFERENCE):
{bible}

CONSTRAINTS:
1. Output exactly {count} scenes, numbered 1 to {count} in order.
2. DURATION: Each scene represents an 8-second video clip. Actions must be concise but vivid.
3. CONTINUITY: Ensure logical flow between Scene N and Scene N+1 based on the script.
4. CHARACTER CONSISTENCY: Ensure characters look and act exactly as described in the Bible.
5. NO TEXT: No overlays, subtitles, or speech bubbles.
6. FORMAT: Return JSON matching the schema.

{fields}

- transition: Edit transition from previous shot (e.g., "Cut to", "Dissolve").
- dialogue: OPTIONAL. Must be spoken within 3-4 seconds max."#,
        count = settings.scene_count,
        source = source_material,
        title = settings.title.as_deref().unwrap_or("Untitled"),
        context = settings.context,
        style = settings.style,
        bible = bible.english,
        fields = field_instructions(settings.style),
    )
}

/// Single-scene improvement request. Identity is pinned by the caller; the
/// payload's number is informational only.
pub fn regenerate_prompt(
    scene_number: u32,
    settings: &ProjectSettings,
    bible: &CharacterBible,
    current: &SceneData,
) -> String {
    format!(
        r#"Regenerate a specific scene (Scene #{number}) for a VEO 3 AI video storyboard.

Title: {title}
Context: {context}
Style: {style}

Character Bible: {bible}

Previous/Current Draft of Scene:
{draft}

Task: Improve the prompt for better visual fidelity, action clarity, and lighting. Keep it consistent with the Bible.
Return a SINGLE scene object."#,
        number = scene_number,
        title = settings.title.as_deref().unwrap_or("Untitled"),
        context = settings.context,
        style = settings.style,
        bible = bible.english,
        draft = current.description_en,
    )
}
