//! The single mutation entry point for the live project. Every operation is
//! atomic with respect to the in-memory model: it either fully applies or
//! leaves the project untouched.

use std::collections::HashMap;

use super::model::{
    AspectRatio, CharacterBible, CinematicStyle, FullProjectData, ProjectSettings, SceneData,
    SceneId, ScenePatch,
};
use super::presets;
use crate::codec;
use crate::error::StoryboardError;
use crate::gateway::GeneratedScene;
use crate::prompt::{self, CharacterProfile, Language};

/// Settings field targeted by a suggestion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionField {
    Title,
    Context,
    Idea,
}

/// Snapshot taken when a regeneration request is issued. The result is
/// discarded as stale if the scene was deleted or edited, or the scene list
/// was wholesale-replaced, while the request was in flight.
#[derive(Debug, Clone)]
pub struct RegenTicket {
    id: SceneId,
    number: u32,
    generation: u64,
    revision: u64,
}

impl RegenTicket {
    pub fn id(&self) -> &SceneId {
        &self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

pub struct ProjectStore {
    data: FullProjectData,
    /// Bumped on every wholesale scene-list replacement.
    generation: u64,
    /// Per-scene edit counters; entries live as long as the scene does.
    revisions: HashMap<SceneId, u64>,
}

impl ProjectStore {
    /// Fresh session state: defaults with an empty scene list.
    pub fn new() -> Self {
        Self::from_data(presets::default_project())
    }

    pub fn from_data(data: FullProjectData) -> Self {
        Self {
            data,
            generation: 0,
            revisions: HashMap::new(),
        }
    }

    pub fn data(&self) -> &FullProjectData {
        &self.data
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.data.settings
    }

    pub fn bible(&self) -> &CharacterBible {
        &self.data.character_bible
    }

    pub fn scenes(&self) -> &[SceneData] {
        &self.data.scenes
    }

    pub fn scene(&self, id: &SceneId) -> Option<&SceneData> {
        self.data.scenes.iter().find(|s| &s.id == id)
    }

    /// Look a scene up by its display number (first match wins; numbers are
    /// advisory and may collide after manual edits).
    pub fn scene_by_number(&self, number: u32) -> Option<&SceneData> {
        self.data.scenes.iter().find(|s| s.number == number)
    }

    /// Replace exactly one settings field with a suggestion result.
    pub fn apply_suggestion(&mut self, field: SuggestionField, value: String) {
        match field {
            SuggestionField::Title => self.data.settings.title = Some(value),
            SuggestionField::Context => self.data.settings.context = value,
            SuggestionField::Idea => self.data.settings.video_idea = value,
        }
    }

    pub fn apply_generated_script(&mut self, text: String) {
        self.data.settings.script = text;
    }

    pub fn set_style(&mut self, style: CinematicStyle) {
        self.data.settings.style = style;
    }

    pub fn set_ratio(&mut self, ratio: AspectRatio) {
        self.data.settings.ratio = ratio;
    }

    pub fn set_scene_count(&mut self, count: u32) -> Result<(), StoryboardError> {
        self.data.settings.scene_count = ProjectSettings::validate_scene_count(count)?;
        Ok(())
    }

    pub fn set_bible(&mut self, language: Language, text: String) {
        match language {
            Language::En => self.data.character_bible.english = text,
            Language::Vi => self.data.character_bible.vietnamese = text,
        }
    }

    /// Append a character paragraph to each language variant, built from that
    /// variant's own non-empty builder fields. A variant with nothing to say
    /// is left unchanged.
    pub fn add_character(&mut self, english: &CharacterProfile, vietnamese: &CharacterProfile) {
        let en_paragraph = english.to_paragraph(prompt::wearing_prefix(Language::En));
        if !en_paragraph.is_empty() {
            self.data.character_bible.english =
                prompt::append_paragraph(&self.data.character_bible.english, &en_paragraph);
        }

        let vi_paragraph = vietnamese.to_paragraph(prompt::wearing_prefix(Language::Vi));
        if !vi_paragraph.is_empty() {
            self.data.character_bible.vietnamese =
                prompt::append_paragraph(&self.data.character_bible.vietnamese, &vi_paragraph);
        }
    }

    /// Replace the entire scene list with generation results. Every incoming
    /// record gets a fresh id; order equals payload order; numbers are
    /// assigned 1..=n positionally.
    pub fn apply_storyboard(&mut self, records: Vec<GeneratedScene>) {
        self.data.scenes = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_scene(SceneId::fresh(), i as u32 + 1))
            .collect();
        self.generation += 1;
        self.revisions.clear();
    }

    /// Snapshot a scene's identity and revision before issuing a
    /// regeneration request for it.
    pub fn regen_ticket(&self, id: &SceneId) -> Result<RegenTicket, StoryboardError> {
        let scene = self
            .scene(id)
            .ok_or_else(|| StoryboardError::SceneNotFound(id.to_string()))?;
        Ok(RegenTicket {
            id: scene.id.clone(),
            number: scene.number,
            generation: self.generation,
            revision: self.revisions.get(&scene.id).copied().unwrap_or(0),
        })
    }

    /// Replace the ticketed scene with a regeneration result, preserving its
    /// id and number no matter what the payload claims. A result that
    /// arrives after the scene was deleted, edited, or the list replaced is
    /// rejected as stale and nothing changes.
    pub fn apply_regenerated_scene(
        &mut self,
        ticket: &RegenTicket,
        record: GeneratedScene,
    ) -> Result<(), StoryboardError> {
        if ticket.generation != self.generation {
            return Err(StoryboardError::StaleRegeneration(ticket.id.to_string()));
        }

        let current_revision = self.revisions.get(&ticket.id).copied().unwrap_or(0);
        if ticket.revision != current_revision {
            return Err(StoryboardError::StaleRegeneration(ticket.id.to_string()));
        }

        let scene = self
            .data
            .scenes
            .iter_mut()
            .find(|s| s.id == ticket.id)
            .ok_or_else(|| StoryboardError::SceneNotFound(ticket.id.to_string()))?;

        *scene = record.into_scene(scene.id.clone(), scene.number);
        *self.revisions.entry(ticket.id.clone()).or_insert(0) += 1;
        Ok(())
    }

    /// Merge the given fields into the scene with that id; unspecified
    /// fields are unchanged.
    pub fn update_scene(&mut self, id: &SceneId, patch: ScenePatch) -> Result<(), StoryboardError> {
        let scene = self
            .data
            .scenes
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoryboardError::SceneNotFound(id.to_string()))?;

        if let Some(number) = patch.number {
            scene.number = number;
        }
        if let Some(text) = patch.description_en {
            scene.description_en = text;
        }
        if let Some(text) = patch.description_vi {
            scene.description_vi = text;
        }
        if let Some(text) = patch.camera {
            scene.camera = text;
        }
        if let Some(text) = patch.lighting {
            scene.lighting = text;
        }
        if let Some(text) = patch.action {
            scene.action = text;
        }
        if let Some(text) = patch.transition {
            scene.transition = Some(text);
        }
        if let Some(text) = patch.dialogue {
            scene.dialogue = Some(text);
        }

        *self.revisions.entry(id.clone()).or_insert(0) += 1;
        Ok(())
    }

    /// Remove the scene with that id. Remaining scenes keep their numbers.
    pub fn delete_scene(&mut self, id: &SceneId) -> Result<(), StoryboardError> {
        let before = self.data.scenes.len();
        self.data.scenes.retain(|s| &s.id != id);
        if self.data.scenes.len() == before {
            return Err(StoryboardError::SceneNotFound(id.to_string()));
        }
        self.revisions.remove(id);
        Ok(())
    }

    /// Append a placeholder scene numbered one past the current last scene.
    pub fn add_scene(&mut self) -> SceneId {
        let next_number = self.data.scenes.last().map(|s| s.number).unwrap_or(0) + 1;
        let scene = SceneData::placeholder(next_number);
        let id = scene.id.clone();
        self.data.scenes.push(scene);
        id
    }

    /// Empty the scene list. Any confirmation step is the caller's concern.
    pub fn clear_all(&mut self) {
        self.data.scenes.clear();
        self.generation += 1;
        self.revisions.clear();
    }

    /// Replace settings, bible, and scenes wholesale.
    pub fn load_preset(&mut self, data: FullProjectData) {
        self.data = data;
        self.generation += 1;
        self.revisions.clear();
    }

    /// Import a project document. On any import error the current project is
    /// left untouched.
    pub fn import_json(&mut self, text: &str) -> Result<(), StoryboardError> {
        let data = codec::import_project(text)?;
        self.load_preset(data);
        Ok(())
    }

    pub fn export_json(&self) -> String {
        codec::export_project(&self.data)
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
