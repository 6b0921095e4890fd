//! Hand-written fakes for the collaborators a workspace talks to.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use antiabuse::{ActionToken, AntiAbuseError, AntiAbuseResult, TokenSource};
use async_trait::async_trait;
use llm::{GenerationRequest, LlmError, LlmResult, TextGenerator};
use serde_json::Value;

use crate::clipboard::{Clipboard, ClipboardError};

pub struct FakeGenerator {
    response: Mutex<Option<LlmResult<Value>>>,
    fixed: Option<Value>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn returning(value: Value) -> Self {
        Self {
            response: Mutex::new(None),
            fixed: Some(value),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails the first call with `error`; later calls fail with an empty response.
    pub fn failing(error: LlmError) -> Self {
        Self {
            response: Mutex::new(Some(Err(error))),
            fixed: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, request: GenerationRequest) -> LlmResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if let Some(value) = &self.fixed {
            return Ok(value.clone());
        }
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

#[derive(Clone, Copy)]
enum TokenMode {
    Grant,
    Deny,
    Blank,
}

/// Token source with a fixed outcome for every action.
pub struct FakeTokens {
    mode: TokenMode,
    calls: AtomicUsize,
}

impl FakeTokens {
    fn with_mode(mode: TokenMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn granting() -> Self {
        Self::with_mode(TokenMode::Grant)
    }

    pub fn denying() -> Self {
        Self::with_mode(TokenMode::Deny)
    }

    /// Reports success but hands back an empty token.
    pub fn blank() -> Self {
        Self::with_mode(TokenMode::Blank)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenSource for FakeTokens {
    async fn acquire(&self, action: &str) -> AntiAbuseResult<ActionToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let token = match self.mode {
            TokenMode::Deny => {
                return Err(AntiAbuseError::MissingToken {
                    action: action.to_string(),
                })
            }
            TokenMode::Grant => "test-token",
            TokenMode::Blank => "  ",
        };
        Ok(ActionToken {
            action: action.to_string(),
            token: token.to_string(),
        })
    }
}

/// Clipboard that records writes through a shared handle so tests can
/// inspect it after handing ownership to a workspace.
#[derive(Clone, Default)]
pub struct SharedClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    broken: bool,
}

impl SharedClipboard {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Default::default()
        }
    }

    /// Every attempted write, including failed ones.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        if self.broken {
            return Err(ClipboardError("no display available".to_string()));
        }
        Ok(())
    }
}
