use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{AntiAbuseError, AntiAbuseResult};
use crate::recaptcha::TokenVerifier;

/// A one-time token scoped to a single action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionToken {
    pub action: String,
    pub token: String,
}

/// Obtains an anti-abuse token before a costly operation runs.
///
/// An empty token is never a success; implementations return
/// [`AntiAbuseError::MissingToken`] instead.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn acquire(&self, action: &str) -> AntiAbuseResult<ActionToken>;
}

/// Token submitted by the browser together with the form, checked with a
/// [`TokenVerifier`] when acquired.
pub struct SubmittedToken {
    verifier: Arc<dyn TokenVerifier>,
    token: Option<String>,
}

impl SubmittedToken {
    pub fn new(verifier: Arc<dyn TokenVerifier>, token: Option<String>) -> Self {
        Self { verifier, token }
    }
}

#[async_trait]
impl TokenSource for SubmittedToken {
    async fn acquire(&self, action: &str) -> AntiAbuseResult<ActionToken> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AntiAbuseError::MissingToken {
                action: action.to_string(),
            })?;

        let assessment = self.verifier.verify(token, action).await?;
        debug!(action, score = assessment.score, "Anti-abuse token accepted");

        Ok(ActionToken {
            action: action.to_string(),
            token: token.to_string(),
        })
    }
}

/// Issues local tokens without any external check.
///
/// Used when anti-abuse verification is disabled in configuration and by the
/// command-line client, which has no browser to run a challenge in.
#[derive(Debug, Clone, Default)]
pub struct BypassTokenSource;

#[async_trait]
impl TokenSource for BypassTokenSource {
    async fn acquire(&self, action: &str) -> AntiAbuseResult<ActionToken> {
        warn!(action, "Anti-abuse verification bypassed");
        Ok(ActionToken {
            action: action.to_string(),
            token: format!("local-{}", Uuid::new_v4()),
        })
    }
}
