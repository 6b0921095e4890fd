use std::path::PathBuf;
use std::sync::Arc;

use antiabuse::{BypassTokenSource, SubmittedToken, TokenSource, TokenVerifier};
use llm::{OpenRouterGenerator, TextGenerator};
use orchestrator::{ClientSideClipboard, RecordingNotifier, Workspace};
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("LLM configuration error: {0}")]
    Llm(#[from] llm::LlmError),

    #[error("Anti-abuse configuration error: {0}")]
    AntiAbuse(#[from] antiabuse::AntiAbuseError),
}

/// Shared, immutable handles. Each request builds its own [`Workspace`].
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub verifier: Option<Arc<dyn TokenVerifier>>,
    pub recaptcha_site_key: Option<String>,
    pub app_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            verifier: None,
            recaptcha_site_key: None,
            app_dir: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, StateError> {
        let generator = OpenRouterGenerator::new(&config.llm)?;
        let mut state = Self::new(Arc::new(generator));

        if let Some(verifier) = config.anti_abuse.verifier()? {
            state = state.with_verifier(Arc::new(verifier), config.anti_abuse.site_key.clone());
        }
        if let Some(app_dir) = &config.server.app_dir {
            state = state.with_app_dir(app_dir.clone());
        }

        tracing::info!(
            anti_abuse = state.anti_abuse_enabled(),
            "Application state initialized"
        );
        Ok(state)
    }

    pub fn with_verifier(
        mut self,
        verifier: Arc<dyn TokenVerifier>,
        site_key: Option<String>,
    ) -> Self {
        self.verifier = Some(verifier);
        self.recaptcha_site_key = site_key;
        self
    }

    pub fn with_app_dir(mut self, app_dir: PathBuf) -> Self {
        self.app_dir = Some(app_dir);
        self
    }

    pub fn anti_abuse_enabled(&self) -> bool {
        self.verifier.is_some()
    }

    /// Token source for one request, checking the submitted token when
    /// verification is enabled.
    pub fn token_source(&self, token: Option<String>) -> Box<dyn TokenSource> {
        match &self.verifier {
            Some(verifier) => Box::new(SubmittedToken::new(verifier.clone(), token)),
            None => Box::new(BypassTokenSource),
        }
    }

    /// Fresh workspace whose notifications are collected for the response.
    pub fn workspace(&self) -> (Workspace, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let workspace = Workspace::new(
            self.generator.clone(),
            Box::new(ClientSideClipboard::default()),
            notifier.clone(),
        );
        (workspace, notifier)
    }
}
