use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AntiAbuseError, AntiAbuseResult};

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub action: String,
    pub score: f32,
    pub hostname: Option<String>,
}

/// Server-side check of a client-provided token for a named action.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str, action: &str) -> AntiAbuseResult<Assessment>;
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default)]
    score: Option<f32>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    hostname: Option<String>,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Google reCAPTCHA v3 `siteverify` client.
#[derive(Clone)]
pub struct RecaptchaVerifier {
    client: Client,
    secret_key: String,
    verify_url: String,
    min_score: f32,
}

impl RecaptchaVerifier {
    pub fn new(secret_key: String, verify_url: String, min_score: f32) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            verify_url,
            min_score,
        }
    }
}

#[async_trait]
impl TokenVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str, action: &str) -> AntiAbuseResult<Assessment> {
        debug!(action, "Verifying anti-abuse token");

        let response = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", self.secret_key.as_str()), ("response", token)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "reCAPTCHA siteverify failed");
            return Err(AntiAbuseError::Unavailable(format!(
                "siteverify returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: SiteVerifyResponse = response.json().await?;

        if !body.success {
            warn!(codes = ?body.error_codes, "reCAPTCHA token rejected");
            return Err(AntiAbuseError::Rejected {
                codes: body.error_codes,
            });
        }

        let actual = body.action.unwrap_or_default();
        if actual != action {
            return Err(AntiAbuseError::ActionMismatch {
                expected: action.to_string(),
                actual,
            });
        }

        let score = body.score.ok_or(AntiAbuseError::MissingScore)?;
        if score < self.min_score {
            return Err(AntiAbuseError::LowScore {
                score,
                min_score: self.min_score,
            });
        }

        Ok(Assessment {
            action: actual,
            score,
            hostname: body.hostname,
        })
    }
}
