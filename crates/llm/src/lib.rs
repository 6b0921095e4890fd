//! LLM access for Promptcraft
//!
//! Wraps the OpenRouter chat completions API behind the [`TextGenerator`]
//! trait. Requests always carry a JSON schema so the answer can be parsed
//! into a single well-known shape.

pub mod error;
pub mod generator;
pub mod openrouter;

pub use error::{LlmError, LlmResult};
pub use generator::{GenerationRequest, OpenRouterGenerator, TextGenerator};
pub use openrouter::client::OpenRouterClient;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Configuration for the generative model backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenRouter API key
    pub api_key: String,

    /// OpenRouter API base URL
    pub base_url: String,

    /// Chat model used for refinement and suggestions
    pub model: String,

    pub temperature: Option<f32>,

    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(0.7),
            max_tokens: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_default() {
        let config = LlmConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_llm_config_partial_fields_fall_back() {
        let config: LlmConfig = serde_json::from_str(r#"{"model": "openai/gpt-4o-mini"}"#).unwrap();
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
