pub mod codec;
pub mod config;
pub mod error;
pub mod gateway;
pub mod project;
pub mod prompt;

pub use config::Config;
pub use error::StoryboardError;
pub use gateway::{GeneratedScene, GenerationClient};
pub use project::{FullProjectData, ProjectStore};
