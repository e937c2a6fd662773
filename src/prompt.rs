//! Assembly of the final per-scene prompt handed to the video model, and the
//! paragraph builder behind the character bible form. Pure string functions;
//! identical inputs produce byte-identical output.

use crate::project::model::{AspectRatio, CharacterBible, SceneData};

/// Which side of the bilingual project to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[strum(to_string = "en", serialize = "english")]
    En,
    #[strum(to_string = "vi", serialize = "vietnamese", serialize = "vn")]
    Vi,
}

impl Language {
    pub fn bible_text<'a>(&self, bible: &'a CharacterBible) -> &'a str {
        match self {
            Language::En => &bible.english,
            Language::Vi => &bible.vietnamese,
        }
    }

    pub fn description<'a>(&self, scene: &'a SceneData) -> &'a str {
        match self {
            Language::En => &scene.description_en,
            Language::Vi => &scene.description_vi,
        }
    }
}

/// Build the full prompt for one scene: bible text, blank line, scene
/// description, then the technical lines. The dialogue line is omitted when
/// there is no dialogue; a missing or empty transition reads "Cut To".
pub fn assemble_scene_prompt(
    bible: &CharacterBible,
    scene: &SceneData,
    ratio: AspectRatio,
    language: Language,
) -> String {
    let mut out = String::new();
    out.push_str(language.bible_text(bible).trim());
    out.push_str("\n\n");
    out.push_str(language.description(scene).trim());
    out.push('\n');

    if let Some(dialogue) = scene.dialogue.as_deref() {
        if !dialogue.is_empty() {
            out.push_str(&format!("Dialogue: \"{}\"\n", dialogue));
        }
    }

    let transition = match scene.transition.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => "Cut To",
    };

    out.push_str(&format!("Camera: {}\n", scene.camera));
    out.push_str(&format!("Lighting: {}\n", scene.lighting));
    out.push_str(&format!("Transition: {}\n", transition));
    out.push_str(&format!("Ratio: {}", ratio));
    out
}

/// One fragment of a character description. Empty values drop the whole
/// part, prefix and suffix included.
#[derive(Debug, Clone, Copy)]
pub struct CharacterPart<'a> {
    pub value: &'a str,
    pub prefix: &'a str,
    pub suffix: &'a str,
}

impl<'a> CharacterPart<'a> {
    pub fn plain(value: &'a str) -> Self {
        Self {
            value,
            prefix: "",
            suffix: "",
        }
    }

    pub fn prefixed(prefix: &'a str, value: &'a str) -> Self {
        Self {
            value,
            prefix,
            suffix: "",
        }
    }
}

/// Join the non-empty parts with ". ", appending a closing period only if
/// anything was emitted.
pub fn character_paragraph(parts: &[CharacterPart<'_>]) -> String {
    let rendered: Vec<String> = parts
        .iter()
        .filter(|p| !p.value.is_empty())
        .map(|p| format!("{}{}{}", p.prefix, p.value, p.suffix))
        .collect();

    if rendered.is_empty() {
        String::new()
    } else {
        format!("{}.", rendered.join(". "))
    }
}

/// Append a paragraph to existing bible text, separated by a blank line.
pub fn append_paragraph(existing: &str, paragraph: &str) -> String {
    if paragraph.is_empty() {
        return existing.to_string();
    }
    if existing.is_empty() {
        paragraph.to_string()
    } else {
        format!("{}\n\n{}", existing, paragraph)
    }
}

/// Structured character-builder fields for one language variant.
/// Sentence shape: "Name, age. Body. Face. Wearing outfit. Personality."
#[derive(Debug, Clone, Default)]
pub struct CharacterProfile {
    pub name: String,
    pub age: String,
    pub body: String,
    pub face: String,
    pub outfit: String,
    pub personality: String,
}

impl CharacterProfile {
    /// Render the profile as a bible paragraph. `wearing` is the language's
    /// outfit prefix ("Wearing " / "Mặc ").
    pub fn to_paragraph(&self, wearing: &str) -> String {
        let name_part = if self.name.is_empty() || self.age.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.age)
        };

        character_paragraph(&[
            CharacterPart::plain(&name_part),
            CharacterPart::plain(&self.body),
            CharacterPart::plain(&self.face),
            CharacterPart::prefixed(wearing, &self.outfit),
            CharacterPart::plain(&self.personality),
        ])
    }
}

/// Outfit prefix per language.
pub fn wearing_prefix(language: Language) -> &'static str {
    match language {
        Language::En => "Wearing ",
        Language::Vi => "Mặc ",
    }
}
