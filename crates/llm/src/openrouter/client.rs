use reqwest::{header::RETRY_AFTER, Client, Response};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::types::*;
use crate::error::{LlmError, LlmResult};

/// Client for the OpenRouter chat completions API
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a single chat completion constrained to `format` and parse the
    /// first choice as JSON. Failures are returned as-is, without retrying.
    pub async fn structured_completion(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
        format: JsonSchemaFormat,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LlmResult<Value> {
        debug!(
            "Creating structured completion with {} messages, model {}, schema {}",
            messages.len(),
            model,
            format.name
        );

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages,
            temperature,
            max_tokens,
            response_format: Some(ResponseFormat::JsonSchema {
                json_schema: format,
            }),
            stream: Some(false),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let chat_response: ChatCompletionResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        parse_json_content(&content)
    }

    async fn check_status(response: Response) -> LlmResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            warn!("Rate limited by OpenRouter");
            return Err(LlmError::RateLimited { retry_after });
        }

        let error_text = response.text().await.unwrap_or_default();

        if let Ok(error_resp) = serde_json::from_str::<OpenRouterError>(&error_text) {
            error!(
                "OpenRouter API error: {} (type: {:?})",
                error_resp.error.message, error_resp.error.error_type
            );
            return Err(LlmError::Api {
                message: error_resp.error.message,
                status_code: Some(status.as_u16()),
            });
        }

        Err(LlmError::Api {
            message: error_text,
            status_code: Some(status.as_u16()),
        })
    }
}

/// Parse model content as JSON, tolerating a surrounding Markdown code fence.
fn parse_json_content(content: &str) -> LlmResult<Value> {
    let trimmed = content.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    serde_json::from_str(unfenced).map_err(|e| {
        warn!("Model returned non-JSON content: {}", e);
        LlmError::MalformedOutput(e.to_string())
    })
}
