//! Anti-abuse tokens for costly actions.
//!
//! A [`TokenSource`] hands out a token scoped to one action name. In the
//! browser flow the token comes from reCAPTCHA v3 and is checked with
//! Google's `siteverify` endpoint before the action runs.

pub mod error;
pub mod recaptcha;
pub mod source;

pub use error::{AntiAbuseError, AntiAbuseResult};
pub use recaptcha::{Assessment, RecaptchaVerifier, TokenVerifier};
pub use source::{ActionToken, BypassTokenSource, SubmittedToken, TokenSource};

use serde::{Deserialize, Serialize};

pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
pub const DEFAULT_MIN_SCORE: f32 = 0.5;

/// Configuration for anti-abuse verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AntiAbuseConfig {
    /// When false, every action gets a bypass token
    pub enabled: bool,

    /// Public site key handed to the browser
    pub site_key: Option<String>,

    /// Secret key used for `siteverify`
    pub secret_key: Option<String>,

    pub verify_url: String,

    /// Minimum reCAPTCHA v3 score accepted (0.0 - 1.0)
    pub min_score: f32,
}

impl Default for AntiAbuseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            site_key: None,
            secret_key: None,
            verify_url: DEFAULT_VERIFY_URL.to_string(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl AntiAbuseConfig {
    /// Build the verifier for this configuration.
    ///
    /// Returns `None` when verification is disabled. Enabling it without a
    /// secret key is a configuration error.
    pub fn verifier(&self) -> AntiAbuseResult<Option<RecaptchaVerifier>> {
        if !self.enabled {
            return Ok(None);
        }

        let secret_key = self
            .secret_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AntiAbuseError::Unavailable("reCAPTCHA secret key is not configured".to_string())
            })?;

        Ok(Some(RecaptchaVerifier::new(
            secret_key,
            self.verify_url.clone(),
            self.min_score,
        )))
    }
}
