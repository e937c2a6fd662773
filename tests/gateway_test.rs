use storyboard_architect::gateway::prompt::{
    regenerate_prompt, script_prompt, storyboard_prompt, suggest_context_prompt,
    suggest_idea_prompt, suggest_title_prompt,
};
use storyboard_architect::gateway::schema::{
    parse_scene, parse_storyboard, scene_response_schema, storyboard_response_schema,
    GeneratedScene,
};
use storyboard_architect::project::presets;
use storyboard_architect::project::{CinematicStyle, SceneId};
use storyboard_architect::StoryboardError;

const SCENE_JSON: &str = r#"{
    "number": 1,
    "descriptionEn": "A boot on a desk.",
    "descriptionVi": "Chiếc ủng trên bàn.",
    "camera": "Macro static",
    "lighting": "Warm lamp",
    "action": "The boot hops once.",
    "transition": "Cut to"
}"#;

#[test]
fn storyboard_prompt_prefers_long_script_over_idea() {
    let mut data = presets::default_project();
    data.settings.script =
        "A long narrative that easily clears the source material threshold for storyboarding."
            .to_string();

    let prompt = storyboard_prompt(&data.settings, &data.character_bible);
    assert!(prompt.contains("FULL NARRATIVE SCRIPT:"));
    assert!(!prompt.contains("CORE IDEA:"));
}

#[test]
fn storyboard_prompt_falls_back_to_idea_for_short_script() {
    let mut data = presets::default_project();
    data.settings.script = "Too short.".to_string();

    let prompt = storyboard_prompt(&data.settings, &data.character_bible);
    assert!(prompt.contains("CORE IDEA:"));
    assert!(!prompt.contains("FULL NARRATIVE SCRIPT:"));
}

#[test]
fn stop_motion_switches_field_instructions() {
    let mut data = presets::default_project();
    data.settings.style = CinematicStyle::StopMotion;

    let prompt = storyboard_prompt(&data.settings, &data.character_bible);
    assert!(prompt.contains("Objects:"));
    assert!(prompt.contains("Atmosphere:"));
    assert!(prompt.contains("SFX:"));

    data.settings.style = CinematicStyle::Cinematic;
    let prompt = storyboard_prompt(&data.settings, &data.character_bible);
    assert!(!prompt.contains("SFX:"));
    assert!(prompt.contains("FIELD INSTRUCTIONS:"));
}

#[test]
fn storyboard_prompt_pins_scene_count_and_bible() {
    let data = presets::default_project();
    let prompt = storyboard_prompt(&data.settings, &data.character_bible);
    assert!(prompt.contains("3-scene storyboard"));
    assert!(prompt.contains("Captain Nemo"));
}

#[test]
fn script_prompt_demands_consistency_and_pacing() {
    let data = presets::default_project();
    let prompt = script_prompt(&data.settings, &data.character_bible);
    assert!(prompt.contains("STRICT ADHERENCE REQUIRED"));
    assert!(prompt.contains("exactly 3 distinct scenes"));
    assert!(prompt.contains("Captain Nemo"));
}

#[test]
fn suggestion_prompts_carry_their_inputs() {
    let data = presets::default_project();

    let title = suggest_title_prompt(&data.settings);
    assert!(title.contains("Sci-Fi Adventure"));
    assert!(title.contains(&data.settings.video_idea));

    let context = suggest_context_prompt(CinematicStyle::Noir);
    assert!(context.contains("Film Noir"));
    assert!(context.contains("Max 2 sentences"));

    let idea = suggest_idea_prompt(&data.settings);
    assert!(idea.contains(&data.settings.context));
}

#[test]
fn regenerate_prompt_includes_number_and_current_draft() {
    let data = presets::toy_preset();
    let scene = &data.scenes[1];
    let prompt = regenerate_prompt(scene.number, &data.settings, &data.character_bible, scene);
    assert!(prompt.contains("Scene #2"));
    assert!(prompt.contains(&scene.description_en));
    assert!(prompt.contains("SINGLE scene object"));
}

#[test]
fn parse_storyboard_accepts_matching_cardinality() {
    let text = format!("[{}, {}]", SCENE_JSON, SCENE_JSON);
    let scenes = parse_storyboard(&text, 2).unwrap();
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0].camera, "Macro static");
}

#[test]
fn parse_storyboard_rejects_wrong_cardinality() {
    let text = format!("[{}]", SCENE_JSON);
    let result = parse_storyboard(&text, 3);
    assert!(matches!(result, Err(StoryboardError::SchemaError(_))));
}

#[test]
fn parse_storyboard_rejects_malformed_payload() {
    assert!(matches!(
        parse_storyboard("not json", 1),
        Err(StoryboardError::SchemaError(_))
    ));
    assert!(matches!(
        parse_storyboard("[{\"number\": 1}]", 1),
        Err(StoryboardError::SchemaError(_))
    ));
}

#[test]
fn parse_scene_accepts_optional_dialogue() {
    let scene = parse_scene(SCENE_JSON).unwrap();
    assert_eq!(scene.dialogue, None);
    assert_eq!(scene.transition.as_deref(), Some("Cut to"));
}

#[test]
fn into_scene_pins_caller_identity() {
    let generated: GeneratedScene = parse_scene(SCENE_JSON).unwrap();
    assert_eq!(generated.number, 1);

    let scene = generated.into_scene(SceneId::from("s_keep"), 7);
    assert_eq!(scene.id.to_string(), "s_keep");
    assert_eq!(scene.number, 7);
    assert_eq!(scene.camera, "Macro static");
}

#[test]
fn response_schemas_describe_the_scene_shape() {
    let array = storyboard_response_schema();
    assert_eq!(array["type"], "ARRAY");
    assert_eq!(array["items"]["type"], "OBJECT");

    let object = scene_response_schema();
    assert_eq!(object["type"], "OBJECT");
    let required: Vec<&str> = object["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    for field in ["number", "descriptionEn", "descriptionVi", "camera", "lighting", "action"] {
        assert!(required.contains(&field), "missing {}", field);
    }
}
