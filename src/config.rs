use crate::error::{AgriSenseError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_model(),
            enabled: true,
        }
    }

    /// Read the Gemini configuration from the environment. Augmentation is
    /// optional, so callers that treat a missing key as "run rules-only"
    /// should pass `GeminiConfig::from_env().ok()` to the engine.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AgriSenseError::Config("GEMINI_API_KEY is not set".into()))?;

        let model = std::env::var("AGRISENSE_GEMINI_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(default_model);

        Ok(Self {
            api_key,
            model,
            enabled: true,
        })
    }

    /// True when this config can actually be used for generation.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}
