use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            model: None,
            base_url: None,
        }
    }
}

impl LlmConfig {
    /// Get the model, using provider-specific defaults if not set
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| match self.provider.as_str() {
                "gemini" => "gemini-2.5-flash",
                "openai" => "gpt-4o",
                "openrouter" => "google/gemini-2.5-flash",
                "lmstudio" => "",
                _ => "gpt-4o",
            })
    }

    /// Get the base URL, using provider-specific defaults if not set
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| match self.provider.as_str() {
                "gemini" => "https://generativelanguage.googleapis.com/v1beta",
                "openai" => "https://api.openai.com/v1",
                "openrouter" => "https://openrouter.ai/api/v1",
                "lmstudio" => "http://localhost:1234/v1",
                _ => "https://api.openai.com/v1",
            })
    }

    /// Check if this provider requires an API key
    pub fn requires_api_key(&self) -> bool {
        self.provider != "lmstudio"
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

/// Where the project document lives when `--project` is not given.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    #[serde(default = "default_project_path")]
    pub path: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            path: default_project_path(),
        }
    }
}

fn default_project_path() -> PathBuf {
    PathBuf::from("storyboard.json")
}

impl Config {
    /// Load config from file or default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_path()
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            let mut config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))?;

            config.apply_env_fallbacks();
            Ok(config)
        } else {
            let mut config = Config::default();
            config.apply_env_fallbacks();
            Ok(config)
        }
    }

    /// Default config path: ~/.config/storyboard-architect/config.toml
    pub fn default_path() -> PathBuf {
        // Prefer ~/.config on all platforms for consistency
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home
                .join(".config")
                .join("storyboard-architect")
                .join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storyboard-architect")
            .join("config.toml")
    }

    /// Apply environment variable fallbacks for API keys
    fn apply_env_fallbacks(&mut self) {
        if self.llm.api_key.is_none() {
            self.llm.api_key = match self.llm.provider.as_str() {
                "gemini" => std::env::var("GEMINI_API_KEY").ok(),
                "openai" => std::env::var("OPENAI_API_KEY").ok(),
                "openrouter" => std::env::var("OPENROUTER_API_KEY").ok(),
                "lmstudio" => Some("dummy".to_string()),
                _ => None,
            };
        }
    }

    /// Get the API key, returning an error if not set (except for lmstudio)
    pub fn api_key(&self) -> Result<&str> {
        if self.llm.provider == "lmstudio" {
            return Ok(self.llm.api_key.as_deref().unwrap_or("dummy"));
        }

        self.llm.api_key.as_deref().ok_or_else(|| {
            let env_var = match self.llm.provider.as_str() {
                "gemini" => "GEMINI_API_KEY",
                "openai" => "OPENAI_API_KEY",
                "openrouter" => "OPENROUTER_API_KEY",
                _ => "API_KEY",
            };
            anyhow::anyhow!(
                "API key not configured for {}.\n\nSet environment variable:\n   export {}=your-key-here\n\nOr add to config file:\n   {}",
                self.llm.provider,
                env_var,
                Self::default_path().display()
            )
        })
    }

    /// Write config to file
    pub fn write(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}
