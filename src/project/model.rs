use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Output aspect ratio for the downstream video model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    #[strum(to_string = "16:9", serialize = "landscape")]
    Ratio16x9,
    #[serde(rename = "9:16")]
    #[strum(to_string = "9:16", serialize = "portrait")]
    Ratio9x16,
}

/// Closed set of genre tags. Unknown values are rejected at the codec
/// boundary instead of being passed through.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CinematicStyle {
    Cinematic,
    Anime,
    Realistic,
    Cyberpunk,
    #[serde(rename = "Vintage Film")]
    #[strum(to_string = "Vintage Film", serialize = "vintage")]
    Vintage,
    Documentary,
    #[serde(rename = "Sci-Fi Adventure")]
    #[strum(to_string = "Sci-Fi Adventure", serialize = "sci-fi", serialize = "scifi")]
    SciFi,
    Fantasy,
    Horror,
    #[serde(rename = "Film Noir")]
    #[strum(to_string = "Film Noir", serialize = "noir")]
    Noir,
    Western,
    #[serde(rename = "Stop Motion")]
    #[strum(to_string = "Stop Motion", serialize = "stop-motion", serialize = "stopmotion")]
    StopMotion,
}

impl CinematicStyle {
    /// Stop Motion scenes use the labeled Objects/Atmosphere/SFX description
    /// format.
    pub fn is_stop_motion(&self) -> bool {
        matches!(self, CinematicStyle::StopMotion)
    }
}

/// Opaque scene identifier. Assigned once at creation and never changed;
/// imported documents may carry arbitrary id strings and keep them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Mint a new unique id.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SceneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Parallel free-text character descriptions, reused verbatim in every scene
/// prompt to keep appearance and personality consistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterBible {
    pub english: String,
    pub vietnamese: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Scene-independent environment description.
    pub context: String,
    /// Short plot summary.
    pub video_idea: String,
    /// Optional full narrative; preferred over the idea as storyboard source
    /// material once it holds real content. Older documents may omit it.
    #[serde(default)]
    pub script: String,
    pub style: CinematicStyle,
    pub ratio: AspectRatio,
    pub scene_count: u32,
}

pub const MIN_SCENE_COUNT: u32 = 1;
pub const MAX_SCENE_COUNT: u32 = 50;

impl ProjectSettings {
    pub fn validate_scene_count(count: u32) -> Result<u32, crate::StoryboardError> {
        if (MIN_SCENE_COUNT..=MAX_SCENE_COUNT).contains(&count) {
            Ok(count)
        } else {
            Err(crate::StoryboardError::InvalidSceneCount(count))
        }
    }
}

/// One ~8-second shot. `number` reflects intended sequence order but is
/// advisory: manual edits and deletes may leave it non-unique or gapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    pub id: SceneId,
    pub number: u32,
    pub description_en: String,
    pub description_vi: String,
    pub camera: String,
    pub lighting: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<String>,
}

impl SceneData {
    /// Blank scene inserted by the manual "add scene" action.
    pub fn placeholder(number: u32) -> Self {
        Self {
            id: SceneId::fresh(),
            number,
            description_en: "New empty scene...".to_string(),
            description_vi: "Cảnh mới...".to_string(),
            camera: "Wide shot".to_string(),
            lighting: "Natural light".to_string(),
            action: "Enter action...".to_string(),
            transition: Some("Cut to".to_string()),
            dialogue: None,
        }
    }
}

/// Partial scene update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ScenePatch {
    pub number: Option<u32>,
    pub description_en: Option<String>,
    pub description_vi: Option<String>,
    pub camera: Option<String>,
    pub lighting: Option<String>,
    pub action: Option<String>,
    pub transition: Option<String>,
    pub dialogue: Option<String>,
}

/// The unit of import/export: a document missing any of the three top-level
/// keys is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProjectData {
    pub settings: ProjectSettings,
    pub character_bible: CharacterBible,
    pub scenes: Vec<SceneData>,
}
