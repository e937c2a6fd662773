use std::collections::HashSet;

use storyboard_architect::gateway::GeneratedScene;
use storyboard_architect::project::presets;
use storyboard_architect::project::{ProjectStore, ScenePatch, SuggestionField};
use storyboard_architect::StoryboardError;

fn record(tag: &str) -> GeneratedScene {
    GeneratedScene {
        number: 99,
        description_en: format!("Visual {}", tag),
        description_vi: format!("Hình ảnh {}", tag),
        camera: format!("Camera {}", tag),
        lighting: format!("Lighting {}", tag),
        action: format!("Action {}", tag),
        transition: Some("Cut to".to_string()),
        dialogue: None,
    }
}

fn store_with_scenes(n: usize) -> ProjectStore {
    let mut store = ProjectStore::new();
    let records = (0..n).map(|i| record(&i.to_string())).collect();
    store.apply_storyboard(records);
    store
}

#[test]
fn new_store_has_defaults_and_no_scenes() {
    let store = ProjectStore::new();
    assert!(store.scenes().is_empty());
    assert!(!store.bible().english.is_empty());
    assert!(!store.bible().vietnamese.is_empty());
    assert!(store.settings().scene_count >= 1);
}

#[test]
fn apply_storyboard_assigns_fresh_ids_and_positional_numbers() {
    let store = store_with_scenes(4);

    assert_eq!(store.scenes().len(), 4);

    let ids: HashSet<String> = store.scenes().iter().map(|s| s.id.to_string()).collect();
    assert_eq!(ids.len(), 4);

    for (i, scene) in store.scenes().iter().enumerate() {
        assert_eq!(scene.number, i as u32 + 1);
        assert_eq!(scene.description_en, format!("Visual {}", i));
    }
}

#[test]
fn apply_storyboard_replaces_previous_list() {
    let mut store = store_with_scenes(3);
    let old_ids: Vec<String> = store.scenes().iter().map(|s| s.id.to_string()).collect();

    store.apply_storyboard(vec![record("fresh")]);

    assert_eq!(store.scenes().len(), 1);
    assert!(!old_ids.contains(&store.scenes()[0].id.to_string()));
}

#[test]
fn regeneration_preserves_id_and_number() {
    let mut store = store_with_scenes(3);
    let target = store.scenes()[1].clone();

    let ticket = store.regen_ticket(&target.id).unwrap();
    // The payload claims a different number; it must not win.
    store.apply_regenerated_scene(&ticket, record("regen")).unwrap();

    let scene = store.scene(&target.id).unwrap();
    assert_eq!(scene.id, target.id);
    assert_eq!(scene.number, target.number);
    assert_eq!(scene.description_en, "Visual regen");
}

#[test]
fn regeneration_after_delete_is_rejected() {
    let mut store = store_with_scenes(2);
    let target_id = store.scenes()[0].id.clone();

    let ticket = store.regen_ticket(&target_id).unwrap();
    store.delete_scene(&target_id).unwrap();

    let result = store.apply_regenerated_scene(&ticket, record("late"));
    assert!(matches!(result, Err(StoryboardError::SceneNotFound(_))));
    assert_eq!(store.scenes().len(), 1);
}

#[test]
fn regeneration_after_edit_is_stale() {
    let mut store = store_with_scenes(2);
    let target_id = store.scenes()[0].id.clone();

    let ticket = store.regen_ticket(&target_id).unwrap();
    store
        .update_scene(
            &target_id,
            ScenePatch {
                camera: Some("Handheld".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let result = store.apply_regenerated_scene(&ticket, record("late"));
    assert!(matches!(result, Err(StoryboardError::StaleRegeneration(_))));
    // The manual edit survives.
    assert_eq!(store.scene(&target_id).unwrap().camera, "Handheld");
}

#[test]
fn regeneration_after_wholesale_replacement_is_stale() {
    let mut store = store_with_scenes(1);
    let target_id = store.scenes()[0].id.clone();

    let ticket = store.regen_ticket(&target_id).unwrap();
    store.apply_storyboard(vec![record("a"), record("b")]);

    let result = store.apply_regenerated_scene(&ticket, record("late"));
    assert!(matches!(result, Err(StoryboardError::StaleRegeneration(_))));
}

#[test]
fn concurrent_regens_of_different_scenes_do_not_collide() {
    let mut store = store_with_scenes(3);
    let first = store.scenes()[0].id.clone();
    let second = store.scenes()[1].id.clone();

    let ticket_a = store.regen_ticket(&first).unwrap();
    let ticket_b = store.regen_ticket(&second).unwrap();

    store.apply_regenerated_scene(&ticket_a, record("a")).unwrap();
    store.apply_regenerated_scene(&ticket_b, record("b")).unwrap();

    assert_eq!(store.scene(&first).unwrap().description_en, "Visual a");
    assert_eq!(store.scene(&second).unwrap().description_en, "Visual b");
}

#[test]
fn update_scene_merges_only_given_fields() {
    let mut store = store_with_scenes(1);
    let id = store.scenes()[0].id.clone();
    let before = store.scenes()[0].clone();

    store
        .update_scene(
            &id,
            ScenePatch {
                lighting: Some("Moonlight".to_string()),
                dialogue: Some("Hello.".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let after = store.scene(&id).unwrap();
    assert_eq!(after.lighting, "Moonlight");
    assert_eq!(after.dialogue.as_deref(), Some("Hello."));
    assert_eq!(after.camera, before.camera);
    assert_eq!(after.description_en, before.description_en);
    assert_eq!(after.number, before.number);
}

#[test]
fn update_unknown_scene_is_not_found() {
    let mut store = store_with_scenes(1);
    let result = store.update_scene(&"nope".into(), ScenePatch::default());
    assert!(matches!(result, Err(StoryboardError::SceneNotFound(_))));
}

#[test]
fn delete_scene_removes_exactly_one_and_keeps_the_rest() {
    let mut store = store_with_scenes(3);
    let victim = store.scenes()[1].clone();
    let kept: Vec<_> = vec![store.scenes()[0].clone(), store.scenes()[2].clone()];

    store.delete_scene(&victim.id).unwrap();

    assert_eq!(store.scenes().len(), 2);
    assert_eq!(store.scenes()[0], kept[0]);
    assert_eq!(store.scenes()[1], kept[1]);
    assert!(store.scene(&victim.id).is_none());
}

#[test]
fn add_scene_appends_with_next_number_and_fresh_id() {
    let mut store = store_with_scenes(2);
    let existing: HashSet<String> = store.scenes().iter().map(|s| s.id.to_string()).collect();

    let id = store.add_scene();

    let added = store.scenes().last().unwrap();
    assert_eq!(added.id, id);
    assert_eq!(added.number, 3);
    assert!(!existing.contains(&id.to_string()));
    assert!(!added.description_en.is_empty());
}

#[test]
fn add_scene_on_empty_list_starts_at_one() {
    let mut store = ProjectStore::new();
    store.add_scene();
    assert_eq!(store.scenes()[0].number, 1);
}

#[test]
fn add_scene_follows_last_number_not_length() {
    let mut store = store_with_scenes(3);
    // Delete the middle scene; numbers are 1 and 3 now.
    let middle = store.scenes()[1].id.clone();
    store.delete_scene(&middle).unwrap();

    store.add_scene();
    assert_eq!(store.scenes().last().unwrap().number, 4);
}

#[test]
fn clear_all_empties_the_list() {
    let mut store = store_with_scenes(5);
    store.clear_all();
    assert!(store.scenes().is_empty());
}

#[test]
fn apply_suggestion_replaces_exactly_one_field() {
    let mut store = ProjectStore::new();
    let context_before = store.settings().context.clone();

    store.apply_suggestion(SuggestionField::Title, "The Silent Depth".to_string());

    assert_eq!(store.settings().title.as_deref(), Some("The Silent Depth"));
    assert_eq!(store.settings().context, context_before);
}

#[test]
fn apply_generated_script_replaces_script() {
    let mut store = ProjectStore::new();
    store.apply_generated_script("A long story.".to_string());
    assert_eq!(store.settings().script, "A long story.");
}

#[test]
fn scene_count_bounds_are_enforced() {
    let mut store = ProjectStore::new();
    assert!(matches!(
        store.set_scene_count(0),
        Err(StoryboardError::InvalidSceneCount(0))
    ));
    assert!(matches!(
        store.set_scene_count(51),
        Err(StoryboardError::InvalidSceneCount(51))
    ));
    store.set_scene_count(50).unwrap();
    assert_eq!(store.settings().scene_count, 50);
}

#[test]
fn failed_import_leaves_store_unchanged() {
    let mut store = store_with_scenes(2);
    let before = store.data().clone();

    assert!(store.import_json("not json at all").is_err());
    assert_eq!(store.data(), &before);

    assert!(store.import_json("{\"settings\": {}}").is_err());
    assert_eq!(store.data(), &before);
}

#[test]
fn successful_import_replaces_everything() {
    let mut store = ProjectStore::new();
    let text = storyboard_architect::codec::export_project(&presets::toy_preset());

    store.import_json(&text).unwrap();

    assert_eq!(store.scenes().len(), 3);
    assert_eq!(store.settings().title.as_deref(), Some("Boots & KitKat"));
}

#[test]
fn load_preset_replaces_wholesale() {
    let mut store = store_with_scenes(4);
    store.load_preset(presets::toy_preset());
    assert_eq!(store.scenes().len(), 3);
    assert_eq!(store.scenes()[0].id.to_string(), "s_1");
}

// End-to-end: generate three scenes, delete the middle one, numbering of the
// survivors is untouched.
#[test]
fn generate_then_delete_keeps_survivor_numbers() {
    let mut store = ProjectStore::new();
    store.set_scene_count(3).unwrap();

    store.apply_storyboard(vec![record("a"), record("b"), record("c")]);

    let ids: HashSet<String> = store.scenes().iter().map(|s| s.id.to_string()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(
        store.scenes().iter().map(|s| s.number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let middle = store.scene_by_number(2).unwrap().id.clone();
    store.delete_scene(&middle).unwrap();

    assert_eq!(
        store.scenes().iter().map(|s| s.number).collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn add_character_appends_each_variant_from_its_own_parts() {
    use storyboard_architect::prompt::CharacterProfile;

    let mut store = ProjectStore::new();
    let en_before = store.bible().english.clone();
    let vi_before = store.bible().vietnamese.clone();

    let english = CharacterProfile {
        name: "Rex".to_string(),
        body: "a small clay dinosaur".to_string(),
        ..Default::default()
    };
    // No Vietnamese fields filled in: that variant stays as it was.
    let vietnamese = CharacterProfile::default();

    store.add_character(&english, &vietnamese);

    assert_eq!(
        store.bible().english,
        format!("{}\n\nRex. a small clay dinosaur.", en_before)
    );
    assert_eq!(store.bible().vietnamese, vi_before);
}
