use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prompt;
use super::schema::{self, GeneratedScene};
use crate::config::Config;
use crate::error::StoryboardError;
use crate::project::model::{
    CharacterBible, CinematicStyle, ProjectSettings, SceneData, SceneId,
};

const DEFAULT_TITLE: &str = "Untitled Project";

/// Client for the external text-generation capability. Every request is ask
/// once, get a result or a failure: no retries, no streaming, no partial
/// results.
#[derive(Clone)]
pub struct GenerationClient {
    api_key: String,
    model: String,
    provider: String,
    base_url: String,
}

/// One outgoing request: an instruction, an optional system instruction, and
/// an optional structured-output schema.
struct LlmRequest {
    prompt: String,
    system: Option<&'static str>,
    temperature: f32,
    response_schema: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

impl GenerationClient {
    pub fn new(config: &Config) -> Result<Self, StoryboardError> {
        let api_key = config
            .api_key()
            .map_err(|e| StoryboardError::ConfigError(e.to_string()))?
            .to_string();
        Ok(Self {
            api_key,
            model: config.llm.model().to_string(),
            provider: config.llm.provider.clone(),
            base_url: config.llm.base_url().to_string(),
        })
    }

    /// Create client without requiring an API key (for model listing).
    pub fn new_without_auth(config: &Config) -> Self {
        Self {
            api_key: config.llm.api_key.clone().unwrap_or_default(),
            model: config.llm.model().to_string(),
            provider: config.llm.provider.clone(),
            base_url: config.llm.base_url().to_string(),
        }
    }

    /// Fetch available models from the provider.
    pub async fn fetch_available_models(&self) -> Result<Vec<String>, StoryboardError> {
        let client = reqwest::Client::new();
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));

        let mut request = client.get(&url);
        if self.provider == "gemini" {
            request = request.header("x-goog-api-key", &self.api_key);
        } else if !self.api_key.is_empty() && self.api_key != "dummy" {
            request = request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoryboardError::ApiError(format!("Failed to connect to {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoryboardError::ApiError(format!(
                "Failed to fetch models ({}): {}",
                status, body
            )));
        }

        let parsed: Value = response
            .json()
            .await
            .map_err(|e| StoryboardError::ApiError(format!("Failed to parse models response: {}", e)))?;

        let mut models = Vec::new();

        // OpenAI format: { data: [ { id: "..." }, ... ] }
        if let Some(data) = parsed.get("data").and_then(|d| d.as_array()) {
            for entry in data {
                if let Some(id) = entry.get("id").and_then(|i| i.as_str()) {
                    models.push(id.to_string());
                }
            }
        }

        // Gemini format: { models: [ { name: "models/..." }, ... ] }
        if let Some(data) = parsed.get("models").and_then(|d| d.as_array()) {
            for entry in data {
                if let Some(name) = entry.get("name").and_then(|n| n.as_str()) {
                    models.push(name.trim_start_matches("models/").to_string());
                }
            }
        }

        Ok(models)
    }

    /// Suggest a short project title; a blank reply falls back to a fixed
    /// default.
    pub async fn suggest_title(
        &self,
        settings: &ProjectSettings,
    ) -> Result<String, StoryboardError> {
        let text = self
            .generate(&LlmRequest {
                prompt: prompt::suggest_title_prompt(settings),
                system: None,
                temperature: 0.8,
                response_schema: None,
            })
            .await
            .map_err(|e| StoryboardError::SuggestionFailed {
                field: "title".to_string(),
                message: e.to_string(),
            })?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(DEFAULT_TITLE.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Suggest a context setting description. An empty reply is a valid
    /// (empty) suggestion.
    pub async fn suggest_context(
        &self,
        style: CinematicStyle,
    ) -> Result<String, StoryboardError> {
        let text = self
            .generate(&LlmRequest {
                prompt: prompt::suggest_context_prompt(style),
                system: None,
                temperature: 0.8,
                response_schema: None,
            })
            .await
            .map_err(|e| StoryboardError::SuggestionFailed {
                field: "context".to_string(),
                message: e.to_string(),
            })?;
        Ok(text.trim().to_string())
    }

    /// Suggest a short plot idea. An empty reply is a valid (empty)
    /// suggestion.
    pub async fn suggest_idea(
        &self,
        settings: &ProjectSettings,
    ) -> Result<String, StoryboardError> {
        let text = self
            .generate(&LlmRequest {
                prompt: prompt::suggest_idea_prompt(settings),
                system: None,
                temperature: 0.8,
                response_schema: None,
            })
            .await
            .map_err(|e| StoryboardError::SuggestionFailed {
                field: "idea".to_string(),
                message: e.to_string(),
            })?;
        Ok(text.trim().to_string())
    }

    /// Generate the full narrative script.
    pub async fn generate_script(
        &self,
        settings: &ProjectSettings,
        bible: &CharacterBible,
    ) -> Result<String, StoryboardError> {
        self.generate(&LlmRequest {
            prompt: prompt::script_prompt(settings, bible),
            system: Some(prompt::SCRIPT_SYSTEM_PROMPT),
            temperature: 0.8,
            response_schema: None,
        })
        .await
        .map_err(|e| StoryboardError::GenerationFailed(e.to_string()))
    }

    /// Generate a complete storyboard of exactly `settings.scene_count`
    /// scene records.
    pub async fn generate_storyboard(
        &self,
        settings: &ProjectSettings,
        bible: &CharacterBible,
    ) -> Result<Vec<GeneratedScene>, StoryboardError> {
        let count = ProjectSettings::validate_scene_count(settings.scene_count)?;

        let text = self
            .generate(&LlmRequest {
                prompt: prompt::storyboard_prompt(settings, bible),
                system: Some(prompt::STORYBOARD_SYSTEM_PROMPT),
                temperature: 0.7,
                response_schema: Some(schema::storyboard_response_schema()),
            })
            .await
            .map_err(|e| StoryboardError::GenerationFailed(e.to_string()))?;

        schema::parse_storyboard(&Self::extract_json(&text), count)
    }

    /// Regenerate one scene. The returned record carries no identity; the
    /// store restores the original id and number when applying it.
    pub async fn regenerate_scene(
        &self,
        id: &SceneId,
        scene_number: u32,
        settings: &ProjectSettings,
        bible: &CharacterBible,
        current: &SceneData,
    ) -> Result<GeneratedScene, StoryboardError> {
        let text = self
            .generate(&LlmRequest {
                prompt: prompt::regenerate_prompt(scene_number, settings, bible, current),
                system: None,
                temperature: 0.8,
                response_schema: Some(schema::scene_response_schema()),
            })
            .await
            .map_err(|e| StoryboardError::RegenerationFailed {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        schema::parse_scene(&Self::extract_json(&text)).map_err(|e| {
            StoryboardError::RegenerationFailed {
                id: id.to_string(),
                message: e.to_string(),
            }
        })
    }

    async fn generate(&self, req: &LlmRequest) -> Result<String, StoryboardError> {
        match self.provider.as_str() {
            "gemini" => self.call_gemini(req).await,
            "openai" | "openrouter" | "lmstudio" | "custom" => {
                self.call_openai_compatible(req).await
            }
            other => Err(StoryboardError::ConfigError(format!(
                "Unknown provider: {}",
                other
            ))),
        }
    }

    /// Extract JSON from a response that might be wrapped in markdown code
    /// blocks.
    fn extract_json(text: &str) -> String {
        let trimmed = text.trim();

        if let Some(without_start) = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
        {
            if let Some(end_pos) = without_start.rfind("```") {
                return without_start[..end_pos].trim().to_string();
            }
        }

        trimmed.to_string()
    }

    async fn call_gemini(&self, req: &LlmRequest) -> Result<String, StoryboardError> {
        let client = reqwest::Client::new();
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: req.prompt.clone(),
                }],
            }],
            system_instruction: req.system.map(|text| GeminiContent {
                parts: vec![GeminiPart {
                    text: text.to_string(),
                }],
            }),
            generation_config: GeminiGenerationConfig {
                temperature: req.temperature,
                response_mime_type: req
                    .response_schema
                    .as_ref()
                    .map(|_| "application/json".to_string()),
                response_schema: req.response_schema.clone(),
            },
        };

        tracing::debug!(model = %self.model, "Sending Gemini request");

        let response = client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                StoryboardError::ApiError(format!("Failed to send request to Gemini API: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoryboardError::ApiError(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        let response: GeminiResponse = response.json().await.map_err(|e| {
            StoryboardError::ApiError(format!("Failed to parse Gemini response: {}", e))
        })?;

        Ok(Self::collect_candidate_text(&response))
    }

    /// Concatenate the text parts of the first candidate. An empty result is
    /// a valid (empty) reply, not an error.
    fn collect_candidate_text(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// Call an OpenAI-compatible API (OpenAI, OpenRouter, LM Studio, custom
    /// endpoints). Structured requests embed the schema in the instruction
    /// since these endpoints have no native response-schema support.
    async fn call_openai_compatible(&self, req: &LlmRequest) -> Result<String, StoryboardError> {
        let client = reqwest::Client::new();
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut prompt = req.prompt.clone();
        if let Some(schema) = &req.response_schema {
            prompt.push_str(&format!(
                "\n\nReturn ONLY valid JSON conforming to this schema. No markdown, no explanation:\n{}",
                schema
            ));
        }

        let mut messages = Vec::new();
        if let Some(system) = req.system {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": prompt }));

        let request = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": req.temperature,
            "max_tokens": 4096
        });

        let mut req_builder = client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request);

        // LM Studio runs without auth
        if !self.api_key.is_empty() && self.api_key != "dummy" {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = req_builder.send().await.map_err(|e| {
            StoryboardError::ApiError(format!("Failed to send request to {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoryboardError::ApiError(format!(
                "API error ({}) from {}: {}",
                status, url, body
            )));
        }

        let response: Value = response.json().await.map_err(|e| {
            StoryboardError::ApiError(format!("Failed to parse API response: {}", e))
        })?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                StoryboardError::ApiError(format!("Empty response from {}", self.provider))
            })
    }
}
