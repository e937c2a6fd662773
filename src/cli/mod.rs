pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "storyboard-architect")]
#[command(about = "AI storyboard authoring for generative video prompts")]
#[command(version)]
pub struct Cli {
    /// Use alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project document to operate on (default: storyboard.json)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Human-readable output instead of JSON
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project file with default settings
    Init(InitArgs),

    /// Load a built-in sample project
    Preset(PresetArgs),

    /// Show the current project state
    Show,

    /// Edit a settings field directly
    Set(SetArgs),

    /// List the available genre styles
    Styles,

    /// Ask the model to suggest a settings field
    Suggest {
        #[command(subcommand)]
        command: SuggestCommands,
    },

    /// Draft the full narrative script with the model
    Script,

    /// Generate the full storyboard from the script or idea
    Generate,

    /// Regenerate a single scene, keeping its identity
    Regen(SceneRefArgs),

    /// Scene management
    Scene {
        #[command(subcommand)]
        command: SceneCommands,
    },

    /// Character bible management
    Character {
        #[command(subcommand)]
        command: CharacterCommands,
    },

    /// Print the final assembled prompt for a scene
    Prompt(PromptArgs),

    /// Print or write the project document as JSON
    Export(ExportArgs),

    /// Validate a project document and load it
    Import(ImportArgs),

    /// Check config, API key, and project file status
    Doctor,

    /// List models available from the configured provider
    Models,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing project file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct PresetArgs {
    /// Preset name (ex: toy)
    pub name: String,

    /// Overwrite an existing project file
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SettingsField {
    Title,
    Context,
    Idea,
    Script,
    Style,
    Ratio,
    Scenes,
}

#[derive(Args)]
pub struct SetArgs {
    /// Field to edit
    #[arg(value_enum)]
    pub field: SettingsField,

    /// New value (styles and ratios accept their display names)
    pub value: String,
}

#[derive(Subcommand)]
pub enum SuggestCommands {
    /// Suggest a project title
    Title,
    /// Suggest a context setting description
    Context,
    /// Suggest a plot idea
    Idea,
}

#[derive(Subcommand)]
pub enum SceneCommands {
    /// Append an empty placeholder scene
    Add,
    /// Delete a scene by number
    Delete(SceneRefArgs),
    /// Delete all scenes
    Clear(ClearArgs),
    /// List scenes
    List,
    /// Edit fields of a scene
    Edit(SceneEditArgs),
}

#[derive(Args)]
pub struct SceneRefArgs {
    /// Scene number
    pub number: u32,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation requirement
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct SceneEditArgs {
    /// Scene number to edit
    pub number: u32,

    /// New scene number
    #[arg(long)]
    pub renumber: Option<u32>,

    #[arg(long)]
    pub description_en: Option<String>,

    #[arg(long)]
    pub description_vi: Option<String>,

    #[arg(long)]
    pub camera: Option<String>,

    #[arg(long)]
    pub lighting: Option<String>,

    #[arg(long)]
    pub action: Option<String>,

    #[arg(long)]
    pub transition: Option<String>,

    #[arg(long)]
    pub dialogue: Option<String>,
}

#[derive(Subcommand)]
pub enum CharacterCommands {
    /// Build a character paragraph and append it to both bible variants
    Add(CharacterAddArgs),
    /// Replace one bible variant wholesale
    SetBible(SetBibleArgs),
}

#[derive(Args)]
pub struct CharacterAddArgs {
    #[arg(long)]
    pub name_en: Option<String>,
    #[arg(long)]
    pub name_vi: Option<String>,
    #[arg(long)]
    pub age_en: Option<String>,
    #[arg(long)]
    pub age_vi: Option<String>,
    #[arg(long)]
    pub body_en: Option<String>,
    #[arg(long)]
    pub body_vi: Option<String>,
    #[arg(long)]
    pub face_en: Option<String>,
    #[arg(long)]
    pub face_vi: Option<String>,
    #[arg(long)]
    pub outfit_en: Option<String>,
    #[arg(long)]
    pub outfit_vi: Option<String>,
    #[arg(long)]
    pub personality_en: Option<String>,
    #[arg(long)]
    pub personality_vi: Option<String>,
}

#[derive(Args)]
pub struct SetBibleArgs {
    /// Language variant: en or vi
    pub lang: String,

    /// Full replacement text
    pub text: String,
}

#[derive(Args)]
pub struct PromptArgs {
    /// Scene number
    pub number: u32,

    /// Language variant: en or vi
    #[arg(long, default_value = "en")]
    pub lang: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON document to import
    pub file: PathBuf,
}
