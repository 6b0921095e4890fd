use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{LlmError, LlmResult};
use crate::openrouter::{ChatMessage, JsonSchemaFormat, OpenRouterClient};
use crate::LlmConfig;

/// One instruction plus the JSON schema the answer must follow.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub instruction: String,
    pub schema_name: String,
    pub schema: Value,
}

impl GenerationRequest {
    pub fn new(instruction: impl Into<String>, schema_name: impl Into<String>, schema: Value) -> Self {
        Self {
            instruction: instruction.into(),
            schema_name: schema_name.into(),
            schema,
        }
    }
}

/// Black-box text generation returning structured JSON.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> LlmResult<Value>;
}

/// [`TextGenerator`] backed by OpenRouter with a fixed model.
#[derive(Clone)]
pub struct OpenRouterGenerator {
    client: OpenRouterClient,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenRouterGenerator {
    pub fn new(config: &LlmConfig) -> LlmResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::InvalidConfig(
                "OpenRouter API key is not set".to_string(),
            ));
        }
        if config.model.trim().is_empty() {
            return Err(LlmError::InvalidConfig("Model is not set".to_string()));
        }

        Ok(Self {
            client: OpenRouterClient::new(config.api_key.clone(), config.base_url.clone()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OpenRouterGenerator {
    async fn generate(&self, request: GenerationRequest) -> LlmResult<Value> {
        debug!(model = %self.model, schema = %request.schema_name, "Generating structured output");

        self.client
            .structured_completion(
                vec![ChatMessage::user(request.instruction)],
                &self.model,
                JsonSchemaFormat {
                    name: request.schema_name,
                    strict: true,
                    schema: request.schema,
                },
                self.temperature,
                self.max_tokens,
            )
            .await
    }
}
