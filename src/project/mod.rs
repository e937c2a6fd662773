//! The project aggregate: data model, mutation entry point, and presets.

pub mod model;
pub mod presets;
pub mod store;

pub use model::{
    AspectRatio, CharacterBible, CinematicStyle, FullProjectData, ProjectSettings, SceneData,
    SceneId, ScenePatch,
};
pub use store::{ProjectStore, RegenTicket, SuggestionField};
