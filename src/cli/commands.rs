use anyhow::{Context, Result};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;

use storyboard_architect::codec;
use storyboard_architect::config::Config;
use storyboard_architect::gateway::GenerationClient;
use storyboard_architect::project::presets;
use storyboard_architect::project::{
    AspectRatio, CinematicStyle, FullProjectData, ProjectStore, SceneId, ScenePatch,
    SuggestionField,
};
use storyboard_architect::prompt::{assemble_scene_prompt, CharacterProfile, Language};

use super::{
    CharacterAddArgs, CharacterCommands, ClearArgs, Commands, ExportArgs, ImportArgs, InitArgs,
    PresetArgs, PromptArgs, SceneCommands, SceneEditArgs, SceneRefArgs, SetArgs, SetBibleArgs,
    SettingsField, SuggestCommands,
};

pub async fn dispatch(
    config: &Config,
    command: Commands,
    project: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let path = project.unwrap_or_else(|| config.project.path.clone());

    match command {
        Commands::Init(args) => init(&path, args, pretty),
        Commands::Preset(args) => preset(&path, args, pretty),
        Commands::Show => show(&path, pretty),
        Commands::Set(args) => set_field(&path, args, pretty),
        Commands::Styles => styles(pretty),
        Commands::Suggest { command } => suggest(config, &path, command, pretty).await,
        Commands::Script => script(config, &path, pretty).await,
        Commands::Generate => generate(config, &path, pretty).await,
        Commands::Regen(args) => regen(config, &path, args, pretty).await,
        Commands::Scene { command } => scene(&path, command, pretty),
        Commands::Character { command } => character(&path, command, pretty),
        Commands::Prompt(args) => print_prompt(&path, args, pretty),
        Commands::Export(args) => export(&path, args),
        Commands::Import(args) => import(&path, args, pretty),
        Commands::Doctor => doctor(config, &path, pretty),
        Commands::Models => models(config, pretty).await,
    }
}

fn load_store(path: &Path) -> Result<ProjectStore> {
    let text = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read project file {:?} (create one with `init`)",
            path
        )
    })?;
    let data = codec::import_project(&text)
        .with_context(|| format!("Failed to load project from {:?}", path))?;
    Ok(ProjectStore::from_data(data))
}

fn save_store(path: &Path, store: &ProjectStore) -> Result<()> {
    std::fs::write(path, store.export_json())
        .with_context(|| format!("Failed to write project file {:?}", path))
}

fn write_new_project(path: &Path, data: &FullProjectData, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Project file {:?} already exists; pass --force to overwrite",
            path
        );
    }
    std::fs::write(path, codec::export_project(data))
        .with_context(|| format!("Failed to write project file {:?}", path))
}

fn init(path: &Path, args: InitArgs, pretty: bool) -> Result<()> {
    let data = presets::default_project();
    write_new_project(path, &data, args.force)?;

    if pretty {
        println!("Created project at {:?}", path);
    } else {
        println!(
            "{}",
            json!({ "status": "created", "path": path.to_string_lossy() })
        );
    }
    Ok(())
}

fn preset(path: &Path, args: PresetArgs, pretty: bool) -> Result<()> {
    let data = match args.name.as_str() {
        "toy" => presets::toy_preset(),
        other => anyhow::bail!("Unknown preset: {} (available: toy)", other),
    };
    write_new_project(path, &data, args.force)?;

    if pretty {
        println!(
            "Loaded preset '{}' into {:?} ({} scenes)",
            args.name,
            path,
            data.scenes.len()
        );
    } else {
        println!(
            "{}",
            json!({
                "status": "loaded",
                "preset": args.name,
                "path": path.to_string_lossy(),
                "scenes": data.scenes.len()
            })
        );
    }
    Ok(())
}

fn show(path: &Path, pretty: bool) -> Result<()> {
    let store = load_store(path)?;

    if pretty {
        let settings = store.settings();
        println!("Project: {}", settings.title.as_deref().unwrap_or("(untitled)"));
        println!("Style: {}  Ratio: {}  Scenes wanted: {}", settings.style, settings.ratio, settings.scene_count);
        println!("\nContext: {}", settings.context);
        println!("Idea: {}", settings.video_idea);
        if settings.script.is_empty() {
            println!("Script: (none)");
        } else {
            println!("Script: {} chars", settings.script.len());
        }

        let bible = store.bible();
        println!(
            "\nCharacter bible: {} chars (EN), {} chars (VI)",
            bible.english.len(),
            bible.vietnamese.len()
        );

        if store.scenes().is_empty() {
            println!("\nNo scenes yet. Run `generate` or `scene add`.");
        } else {
            println!("\nScenes:");
            for scene in store.scenes() {
                println!(
                    "  {}. [{}] {} | {}",
                    scene.number,
                    scene.id,
                    scene.camera,
                    scene.transition.as_deref().unwrap_or("Cut To")
                );
            }
        }
    } else {
        println!("{}", serde_json::to_string(store.data())?);
    }
    Ok(())
}

fn set_field(path: &Path, args: SetArgs, pretty: bool) -> Result<()> {
    let mut store = load_store(path)?;
    let value = args.value;

    match args.field {
        SettingsField::Title => store.apply_suggestion(SuggestionField::Title, value),
        SettingsField::Context => store.apply_suggestion(SuggestionField::Context, value),
        SettingsField::Idea => store.apply_suggestion(SuggestionField::Idea, value),
        SettingsField::Script => store.apply_generated_script(value),
        SettingsField::Style => {
            let style = CinematicStyle::from_str(&value).map_err(|_| {
                anyhow::anyhow!(
                    "Unknown style: {} (available: {})",
                    value,
                    style_names().join(", ")
                )
            })?;
            store.set_style(style);
        }
        SettingsField::Ratio => {
            let ratio = AspectRatio::from_str(&value)
                .map_err(|_| anyhow::anyhow!("Unknown ratio: {} (use 16:9 or 9:16)", value))?;
            store.set_ratio(ratio);
        }
        SettingsField::Scenes => {
            let count: u32 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Scene count must be a number, got: {}", value))?;
            store.set_scene_count(count)?;
        }
    }

    save_store(path, &store)?;
    if pretty {
        println!("Updated.");
    } else {
        println!("{}", json!({ "status": "updated" }));
    }
    Ok(())
}

fn style_names() -> Vec<String> {
    CinematicStyle::iter().map(|s| s.to_string()).collect()
}

fn styles(pretty: bool) -> Result<()> {
    let names = style_names();
    if pretty {
        println!("Available styles:");
        for name in &names {
            println!("  - {}", name);
        }
    } else {
        println!("{}", json!({ "styles": names }));
    }
    Ok(())
}

/// Suggestions are best-effort: a failure leaves the field unchanged and the
/// command still exits cleanly.
async fn suggest(
    config: &Config,
    path: &Path,
    command: SuggestCommands,
    pretty: bool,
) -> Result<()> {
    let mut store = load_store(path)?;
    let client = GenerationClient::new(config)?;

    let (field, result) = match command {
        SuggestCommands::Title => (
            SuggestionField::Title,
            client.suggest_title(store.settings()).await,
        ),
        SuggestCommands::Context => (
            SuggestionField::Context,
            client.suggest_context(store.settings().style).await,
        ),
        SuggestCommands::Idea => (
            SuggestionField::Idea,
            client.suggest_idea(store.settings()).await,
        ),
    };

    match result {
        Ok(value) => {
            store.apply_suggestion(field, value.clone());
            save_store(path, &store)?;
            if pretty {
                println!("{}", value);
            } else {
                println!("{}", json!({ "status": "applied", "value": value }));
            }
        }
        Err(e) => {
            tracing::warn!("Suggestion failed: {}", e);
            if pretty {
                println!("Suggestion failed; field left unchanged.");
            } else {
                println!(
                    "{}",
                    json!({ "status": "failed", "code": e.code(), "error": e.to_string() })
                );
            }
        }
    }
    Ok(())
}

async fn script(config: &Config, path: &Path, pretty: bool) -> Result<()> {
    let mut store = load_store(path)?;
    let client = GenerationClient::new(config)?;

    let text = client
        .generate_script(store.settings(), store.bible())
        .await?;
    store.apply_generated_script(text.clone());
    save_store(path, &store)?;

    if pretty {
        println!("{}", text);
    } else {
        println!("{}", json!({ "status": "generated", "script": text }));
    }
    Ok(())
}

async fn generate(config: &Config, path: &Path, pretty: bool) -> Result<()> {
    let mut store = load_store(path)?;
    let client = GenerationClient::new(config)?;

    let records = client
        .generate_storyboard(store.settings(), store.bible())
        .await?;
    store.apply_storyboard(records);
    save_store(path, &store)?;

    if pretty {
        println!("Generated {} scenes:", store.scenes().len());
        for scene in store.scenes() {
            println!("  {}. {}", scene.number, scene.camera);
        }
    } else {
        println!(
            "{}",
            json!({ "status": "generated", "scenes": store.scenes() })
        );
    }
    Ok(())
}

async fn regen(config: &Config, path: &Path, args: SceneRefArgs, pretty: bool) -> Result<()> {
    let mut store = load_store(path)?;
    let client = GenerationClient::new(config)?;

    let scene = store
        .scene_by_number(args.number)
        .ok_or_else(|| anyhow::anyhow!("No scene numbered {}", args.number))?;
    let id = scene.id.clone();
    let ticket = store.regen_ticket(&id)?;

    let record = client
        .regenerate_scene(
            &id,
            ticket.number(),
            store.settings(),
            store.bible(),
            scene,
        )
        .await?;

    store.apply_regenerated_scene(&ticket, record)?;
    save_store(path, &store)?;

    if pretty {
        let scene = store.scene(&id).expect("scene survives regeneration");
        println!("Regenerated scene {}:", scene.number);
        println!("{}", scene.description_en);
    } else {
        println!(
            "{}",
            json!({ "status": "regenerated", "scene": store.scene(&id) })
        );
    }
    Ok(())
}

fn scene(path: &Path, command: SceneCommands, pretty: bool) -> Result<()> {
    let mut store = load_store(path)?;

    match command {
        SceneCommands::Add => {
            let id = store.add_scene();
            save_store(path, &store)?;
            let scene = store.scene(&id).expect("scene was just added");
            if pretty {
                println!("Added scene {} ({})", scene.number, scene.id);
            } else {
                println!("{}", json!({ "status": "added", "scene": scene }));
            }
        }
        SceneCommands::Delete(args) => {
            let id = resolve_scene_id(&store, args.number)?;
            store.delete_scene(&id)?;
            save_store(path, &store)?;
            if pretty {
                println!("Deleted scene {}.", args.number);
            } else {
                println!("{}", json!({ "status": "deleted", "id": id.to_string() }));
            }
        }
        SceneCommands::Clear(ClearArgs { yes }) => {
            if !yes {
                anyhow::bail!("This deletes all scenes; pass --yes to confirm");
            }
            store.clear_all();
            save_store(path, &store)?;
            if pretty {
                println!("Cleared all scenes.");
            } else {
                println!("{}", json!({ "status": "cleared" }));
            }
        }
        SceneCommands::List => {
            if pretty {
                for scene in store.scenes() {
                    println!("Scene {} ({})", scene.number, scene.id);
                    println!("  Visual: {}", scene.description_en);
                    println!("  Camera: {}", scene.camera);
                    println!("  Lighting: {}", scene.lighting);
                    println!("  Action: {}", scene.action);
                    if let Some(dialogue) = &scene.dialogue {
                        println!("  Dialogue: \"{}\"", dialogue);
                    }
                    println!();
                }
            } else {
                println!("{}", json!({ "scenes": store.scenes() }));
            }
        }
        SceneCommands::Edit(args) => {
            let id = resolve_scene_id(&store, args.number)?;
            store.update_scene(&id, patch_from_args(args))?;
            save_store(path, &store)?;
            if pretty {
                println!("Updated scene.");
            } else {
                println!("{}", json!({ "status": "updated", "scene": store.scene(&id) }));
            }
        }
    }
    Ok(())
}

fn resolve_scene_id(store: &ProjectStore, number: u32) -> Result<SceneId> {
    store
        .scene_by_number(number)
        .map(|s| s.id.clone())
        .ok_or_else(|| anyhow::anyhow!("No scene numbered {}", number))
}

fn patch_from_args(args: SceneEditArgs) -> ScenePatch {
    ScenePatch {
        number: args.renumber,
        description_en: args.description_en,
        description_vi: args.description_vi,
        camera: args.camera,
        lighting: args.lighting,
        action: args.action,
        transition: args.transition,
        dialogue: args.dialogue,
    }
}

fn character(path: &Path, command: CharacterCommands, pretty: bool) -> Result<()> {
    let mut store = load_store(path)?;

    match command {
        CharacterCommands::Add(args) => {
            let (english, vietnamese) = profiles_from_args(args);
            store.add_character(&english, &vietnamese);
            save_store(path, &store)?;
            if pretty {
                println!("--- English bible ---\n{}", store.bible().english);
                println!("\n--- Vietnamese bible ---\n{}", store.bible().vietnamese);
            } else {
                println!("{}", json!({ "status": "added", "bible": store.bible() }));
            }
        }
        CharacterCommands::SetBible(SetBibleArgs { lang, text }) => {
            let language = parse_language(&lang)?;
            store.set_bible(language, text);
            save_store(path, &store)?;
            if pretty {
                println!("Updated.");
            } else {
                println!("{}", json!({ "status": "updated" }));
            }
        }
    }
    Ok(())
}

fn profiles_from_args(args: CharacterAddArgs) -> (CharacterProfile, CharacterProfile) {
    let english = CharacterProfile {
        name: args.name_en.unwrap_or_default(),
        age: args.age_en.unwrap_or_default(),
        body: args.body_en.unwrap_or_default(),
        face: args.face_en.unwrap_or_default(),
        outfit: args.outfit_en.unwrap_or_default(),
        personality: args.personality_en.unwrap_or_default(),
    };
    let vietnamese = CharacterProfile {
        name: args.name_vi.unwrap_or_default(),
        age: args.age_vi.unwrap_or_default(),
        body: args.body_vi.unwrap_or_default(),
        face: args.face_vi.unwrap_or_default(),
        outfit: args.outfit_vi.unwrap_or_default(),
        personality: args.personality_vi.unwrap_or_default(),
    };
    (english, vietnamese)
}

fn parse_language(text: &str) -> Result<Language> {
    Language::from_str(text).map_err(|_| anyhow::anyhow!("Unknown language: {} (use en or vi)", text))
}

fn print_prompt(path: &Path, args: PromptArgs, pretty: bool) -> Result<()> {
    let store = load_store(path)?;
    let language = parse_language(&args.lang)?;

    let scene = store
        .scene_by_number(args.number)
        .ok_or_else(|| anyhow::anyhow!("No scene numbered {}", args.number))?;

    let text = assemble_scene_prompt(store.bible(), scene, store.settings().ratio, language);

    if pretty {
        println!("{}", text);
    } else {
        println!(
            "{}",
            json!({ "scene": args.number, "lang": args.lang, "prompt": text })
        );
    }
    Ok(())
}

fn export(path: &Path, args: ExportArgs) -> Result<()> {
    let store = load_store(path)?;
    let text = store.export_json();

    if let Some(out) = args.out {
        std::fs::write(&out, &text)
            .with_context(|| format!("Failed to write export to {:?}", out))?;
        println!("Exported to {:?}", out);
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// A failed import leaves the existing project file untouched.
fn import(path: &Path, args: ImportArgs, pretty: bool) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {:?}", args.file))?;

    let mut store = if path.exists() {
        load_store(path)?
    } else {
        ProjectStore::new()
    };
    store.import_json(&text)?;
    save_store(path, &store)?;

    if pretty {
        println!(
            "Imported {:?} ({} scenes).",
            args.file,
            store.scenes().len()
        );
    } else {
        println!(
            "{}",
            json!({ "status": "imported", "scenes": store.scenes().len() })
        );
    }
    Ok(())
}

/// Doctor command - check configuration and project health
fn doctor(config: &Config, path: &Path, pretty: bool) -> Result<()> {
    let mut checks = vec![];

    let api_status = match config.api_key() {
        Ok(_) => json!({
            "name": "api_key",
            "status": "ok",
            "message": format!("Configured for {}", config.llm.provider)
        }),
        Err(e) => json!({
            "name": "api_key",
            "status": "warning",
            "message": e.to_string()
        }),
    };
    checks.push(api_status);

    checks.push(json!({
        "name": "model",
        "status": "ok",
        "message": format!("{} via {}", config.llm.model(), config.llm.base_url())
    }));

    let project_status = if path.exists() {
        match load_store(path) {
            Ok(store) => json!({
                "name": "project",
                "status": "ok",
                "message": format!("{} scenes", store.scenes().len()),
                "path": path.to_string_lossy()
            }),
            Err(e) => json!({
                "name": "project",
                "status": "error",
                "message": e.to_string(),
                "path": path.to_string_lossy()
            }),
        }
    } else {
        json!({
            "name": "project",
            "status": "warning",
            "message": "No project file yet (run `init`)",
            "path": path.to_string_lossy()
        })
    };
    checks.push(project_status);

    if pretty {
        println!("Storyboard Architect Doctor\n");
        for check in &checks {
            let status = check["status"].as_str().unwrap_or("unknown");
            let icon = match status {
                "ok" => "\u{2714}",      // ✔
                "warning" => "\u{26A0}", // ⚠
                "error" => "\u{2718}",   // ✘
                _ => "?",
            };
            println!(
                "{} {}: {}",
                icon,
                check["name"].as_str().unwrap_or(""),
                check["message"].as_str().unwrap_or("")
            );
            if let Some(p) = check["path"].as_str() {
                println!("    Path: {}", p);
            }
        }
    } else {
        println!("{}", serde_json::to_string(&json!({ "checks": checks }))?);
    }
    Ok(())
}

/// List available models from the current provider
async fn models(config: &Config, pretty: bool) -> Result<()> {
    if config.llm.requires_api_key() {
        if let Err(e) = config.api_key() {
            if pretty {
                eprintln!("\u{26A0} {}", e);
            } else {
                println!(
                    "{}",
                    json!({
                        "status": "error",
                        "error": e.to_string(),
                        "config_path": Config::default_path().to_string_lossy()
                    })
                );
            }
            return Ok(());
        }
    }

    let client = GenerationClient::new_without_auth(config);

    match client.fetch_available_models().await {
        Ok(models) => {
            if pretty {
                if models.is_empty() {
                    println!("No models found at {}.", config.llm.base_url());
                } else {
                    println!("Found {} model(s):\n", models.len());
                    for (i, model) in models.iter().enumerate() {
                        println!("  {}. {}", i + 1, model);
                    }
                }
            } else {
                println!(
                    "{}",
                    json!({
                        "status": "success",
                        "provider": config.llm.provider,
                        "base_url": config.llm.base_url(),
                        "models": models,
                        "count": models.len()
                    })
                );
            }
            Ok(())
        }
        Err(e) => {
            if pretty {
                eprintln!("\u{2718} Failed to fetch models: {}", e);
            } else {
                println!(
                    "{}",
                    json!({ "status": "error", "code": e.code(), "error": e.to_string() })
                );
            }
            Err(e.into())
        }
    }
}
