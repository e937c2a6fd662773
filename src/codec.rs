//! Project import/export. One JSON schema for both directions; the exported
//! document is the canonical on-disk and clipboard form.

use serde_json::Value;

use crate::error::StoryboardError;
use crate::project::model::FullProjectData;

const REQUIRED_KEYS: [&str; 3] = ["settings", "characterBible", "scenes"];

/// Serialize the project as indented JSON with stable key order.
pub fn export_project(data: &FullProjectData) -> String {
    // Struct serialization cannot fail for these types.
    serde_json::to_string_pretty(data).expect("project serializes to JSON")
}

/// Parse and validate an imported document. The current project is never
/// touched on failure: this returns a fresh value or an error, nothing else.
pub fn import_project(text: &str) -> Result<FullProjectData, StoryboardError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| StoryboardError::MalformedJson(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or(StoryboardError::MissingField("settings"))?;

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(StoryboardError::MissingField(key));
        }
    }

    // Typed decode rejects unknown style/ratio values and ill-typed fields.
    serde_json::from_value(value).map_err(|e| StoryboardError::InvalidDocument(e.to_string()))
}
