use storyboard_architect::project::{AspectRatio, CharacterBible, SceneData, SceneId};
use storyboard_architect::prompt::{
    append_paragraph, assemble_scene_prompt, character_paragraph, wearing_prefix, CharacterPart,
    CharacterProfile, Language,
};

fn bible() -> CharacterBible {
    CharacterBible {
        english: "Alice, a tall woman with silver hair.".to_string(),
        vietnamese: "Alice, người phụ nữ cao với mái tóc bạc.".to_string(),
    }
}

fn scene() -> SceneData {
    SceneData {
        id: SceneId::from("s_1"),
        number: 1,
        description_en: "She walks through the ruined library.".to_string(),
        description_vi: "Cô bước qua thư viện đổ nát.".to_string(),
        camera: "Slow push-in".to_string(),
        lighting: "Dusty shafts of light".to_string(),
        action: "Walking, trailing a hand along shelves".to_string(),
        transition: Some("Dissolve".to_string()),
        dialogue: None,
    }
}

#[test]
fn assembles_fixed_order_without_dialogue() {
    let expected = "Alice, a tall woman with silver hair.\n\
                    \n\
                    She walks through the ruined library.\n\
                    Camera: Slow push-in\n\
                    Lighting: Dusty shafts of light\n\
                    Transition: Dissolve\n\
                    Ratio: 16:9";
    assert_eq!(
        assemble_scene_prompt(&bible(), &scene(), AspectRatio::Ratio16x9, Language::En),
        expected
    );
}

#[test]
fn assembly_is_deterministic() {
    let a = assemble_scene_prompt(&bible(), &scene(), AspectRatio::Ratio9x16, Language::En);
    let b = assemble_scene_prompt(&bible(), &scene(), AspectRatio::Ratio9x16, Language::En);
    assert_eq!(a, b);
}

#[test]
fn dialogue_line_included_verbatim_in_quotes() {
    let mut s = scene();
    s.dialogue = Some("We shouldn't be here.".to_string());
    let prompt = assemble_scene_prompt(&bible(), &s, AspectRatio::Ratio16x9, Language::En);
    assert!(prompt.contains("Dialogue: \"We shouldn't be here.\"\n"));
}

#[test]
fn empty_dialogue_omits_the_line() {
    let mut s = scene();
    s.dialogue = Some(String::new());
    let prompt = assemble_scene_prompt(&bible(), &s, AspectRatio::Ratio16x9, Language::En);
    assert!(!prompt.contains("Dialogue:"));

    s.dialogue = None;
    let prompt = assemble_scene_prompt(&bible(), &s, AspectRatio::Ratio16x9, Language::En);
    assert!(!prompt.contains("Dialogue:"));
}

#[test]
fn missing_or_empty_transition_reads_cut_to() {
    let mut s = scene();
    s.transition = None;
    let prompt = assemble_scene_prompt(&bible(), &s, AspectRatio::Ratio16x9, Language::En);
    assert!(prompt.contains("Transition: Cut To\n"));

    s.transition = Some(String::new());
    let prompt = assemble_scene_prompt(&bible(), &s, AspectRatio::Ratio16x9, Language::En);
    assert!(prompt.contains("Transition: Cut To\n"));
}

#[test]
fn vietnamese_variant_selects_vietnamese_fields() {
    let prompt = assemble_scene_prompt(&bible(), &scene(), AspectRatio::Ratio9x16, Language::Vi);
    assert!(prompt.starts_with("Alice, người phụ nữ cao"));
    assert!(prompt.contains("Cô bước qua thư viện đổ nát."));
    assert!(prompt.ends_with("Ratio: 9:16"));
}

#[test]
fn trims_outer_whitespace_but_keeps_interior_line_breaks() {
    let mut b = bible();
    b.english = "  Alice.\nShe is tall.  \n".to_string();
    let mut s = scene();
    s.description_en = "\nObjects: boot\nAtmosphere: warm\n".to_string();

    let prompt = assemble_scene_prompt(&b, &s, AspectRatio::Ratio16x9, Language::En);
    assert!(prompt.starts_with("Alice.\nShe is tall.\n\nObjects: boot\nAtmosphere: warm\n"));
}

#[test]
fn character_paragraph_joins_nonempty_parts() {
    let parts = [
        CharacterPart::plain("Nemo, late 40s"),
        CharacterPart::plain(""),
        CharacterPart::plain("piercing blue eyes"),
        CharacterPart::prefixed("Wearing ", "a navy uniform"),
    ];
    assert_eq!(
        character_paragraph(&parts),
        "Nemo, late 40s. piercing blue eyes. Wearing a navy uniform."
    );
}

#[test]
fn character_paragraph_of_empty_parts_is_empty() {
    let parts = [CharacterPart::plain(""), CharacterPart::prefixed("Wearing ", "")];
    assert_eq!(character_paragraph(&parts), "");
}

#[test]
fn append_paragraph_uses_blank_line_separator() {
    assert_eq!(append_paragraph("", "New character."), "New character.");
    assert_eq!(
        append_paragraph("Existing text.", "New character."),
        "Existing text.\n\nNew character."
    );
    assert_eq!(append_paragraph("Existing text.", ""), "Existing text.");
}

#[test]
fn profile_renders_name_age_and_wearing_prefix() {
    let profile = CharacterProfile {
        name: "Sophia".to_string(),
        age: "late twenties".to_string(),
        body: "slim".to_string(),
        face: String::new(),
        outfit: "a waterproof jacket".to_string(),
        personality: "curious".to_string(),
    };
    assert_eq!(
        profile.to_paragraph(wearing_prefix(Language::En)),
        "Sophia, late twenties. slim. Wearing a waterproof jacket. curious."
    );
}

#[test]
fn profile_without_age_keeps_bare_name() {
    let profile = CharacterProfile {
        name: "Sophia".to_string(),
        ..Default::default()
    };
    assert_eq!(profile.to_paragraph("Wearing "), "Sophia.");
}
