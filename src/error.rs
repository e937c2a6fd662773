use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryboardError {
    #[error("Suggestion request for {field} failed: {message}")]
    SuggestionFailed { field: String, message: String },

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Regeneration failed for scene {id}: {message}")]
    RegenerationFailed { id: String, message: String },

    #[error("Regeneration result for scene {0} is stale; discarded")]
    StaleRegeneration(String),

    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    #[error("Generated payload does not match the expected shape: {0}")]
    SchemaError(String),

    #[error("Invalid JSON: {0}")]
    MalformedJson(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid project document: {0}")]
    InvalidDocument(String),

    #[error("Scene count must be between 1 and 50, got {0}")]
    InvalidSceneCount(u32),

    #[error("LLM API error: {0}")]
    ApiError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Error code for JSON output
impl StoryboardError {
    pub fn code(&self) -> &'static str {
        match self {
            StoryboardError::SuggestionFailed { .. } => "SUGGESTION_FAILED",
            StoryboardError::GenerationFailed(_) => "GENERATION_FAILED",
            StoryboardError::RegenerationFailed { .. } => "REGENERATION_FAILED",
            StoryboardError::StaleRegeneration(_) => "STALE_REGENERATION",
            StoryboardError::SceneNotFound(_) => "SCENE_NOT_FOUND",
            StoryboardError::SchemaError(_) => "SCHEMA_ERROR",
            StoryboardError::MalformedJson(_) => "MALFORMED_JSON",
            StoryboardError::MissingField(_) => "MISSING_FIELD",
            StoryboardError::InvalidDocument(_) => "INVALID_DOCUMENT",
            StoryboardError::InvalidSceneCount(_) => "INVALID_SCENE_COUNT",
            StoryboardError::ApiError(_) => "API_ERROR",
            StoryboardError::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}
