use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OpenRouter API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("OpenRouter rate limited{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    #[error("No completion returned")]
    EmptyResponse,

    #[error("Model output is not valid JSON: {0}")]
    MalformedOutput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type LlmResult<T> = Result<T, LlmError>;

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(", retry after {}s", secs))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message() {
        let err = LlmError::RateLimited {
            retry_after: Some(7),
        };
        assert_eq!(err.to_string(), "OpenRouter rate limited, retry after 7s");

        let err = LlmError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "OpenRouter rate limited");
    }
}
