//! Structured-output contract shared with the text-generation provider: the
//! scene record shape requested back, the machine-checkable response schemas,
//! and the payload validation applied before anything reaches the store.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::StoryboardError;
use crate::project::model::{SceneData, SceneId};

/// A scene as returned by the provider: `SceneData` minus the id, which is
/// always assigned on our side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScene {
    pub number: u32,
    pub description_en: String,
    pub description_vi: String,
    pub camera: String,
    pub lighting: String,
    pub action: String,
    #[serde(default)]
    pub transition: Option<String>,
    #[serde(default)]
    pub dialogue: Option<String>,
}

impl GeneratedScene {
    /// Materialize a scene record under the given identity. Used both for
    /// fresh storyboards and regeneration, where id and number always come
    /// from the caller, never from the payload.
    pub fn into_scene(self, id: SceneId, number: u32) -> SceneData {
        SceneData {
            id,
            number,
            description_en: self.description_en,
            description_vi: self.description_vi,
            camera: self.camera,
            lighting: self.lighting,
            action: self.action,
            transition: self.transition,
            dialogue: self.dialogue,
        }
    }
}

fn scene_object_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "number": { "type": "NUMBER" },
            "descriptionEn": {
                "type": "STRING",
                "description": "Visual description. If style is Stop Motion, MUST include headers: 'Objects:', 'Atmosphere:', 'SFX:'."
            },
            "descriptionVi": { "type": "STRING", "description": "Vietnamese visual description." },
            "camera": { "type": "STRING", "description": "Camera angle, movement instructions, and shot type." },
            "lighting": { "type": "STRING", "description": "Lighting setup instructions or style description." },
            "action": { "type": "STRING", "description": "Specific character actions." },
            "transition": { "type": "STRING", "description": "Transition type." },
            "dialogue": { "type": "STRING", "description": "Short dialogue if applicable." }
        },
        "required": ["number", "descriptionEn", "descriptionVi", "camera", "lighting", "action", "transition"]
    })
}

/// Response schema for a full storyboard: an ordered array of scene objects.
pub fn storyboard_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": scene_object_schema()
    })
}

/// Response schema for a single regenerated scene.
pub fn scene_response_schema() -> Value {
    scene_object_schema()
}

/// Parse a storyboard payload and check its cardinality. A payload that does
/// not parse or has the wrong scene count is rejected whole; callers never
/// partially apply it.
pub fn parse_storyboard(text: &str, expected: u32) -> Result<Vec<GeneratedScene>, StoryboardError> {
    let scenes: Vec<GeneratedScene> =
        serde_json::from_str(text).map_err(|e| StoryboardError::SchemaError(e.to_string()))?;

    if scenes.len() != expected as usize {
        return Err(StoryboardError::SchemaError(format!(
            "expected {} scenes, got {}",
            expected,
            scenes.len()
        )));
    }

    Ok(scenes)
}

/// Parse a single-scene payload.
pub fn parse_scene(text: &str) -> Result<GeneratedScene, StoryboardError> {
    serde_json::from_str(text).map_err(|e| StoryboardError::SchemaError(e.to_string()))
}
