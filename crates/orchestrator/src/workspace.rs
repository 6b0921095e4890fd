use std::sync::Arc;

use antiabuse::{ActionToken, AntiAbuseError, TokenSource};
use llm::TextGenerator;
use promptcraft_core::{
    validate_refinement, validate_suggestion, ParameterSuggestion, RefinementRequest,
    SuggestionRequest,
};
use tracing::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::error::{OrchestratorError, Result};
use crate::invoker::RefinementInvoker;
use crate::notify::{Notification, Notifier};
use crate::state_machine::{WorkspaceState, WorkspaceStateMachine};
use crate::suggester::ParameterSuggester;

pub const REFINE_ACTION: &str = "refine_prompt";
pub const SUGGEST_ACTION: &str = "suggest_parameters";

/// Drives one refinement at a time for a single user.
///
/// `submit` borrows the workspace mutably for the whole request, so a second
/// submission cannot start while one is in flight.
pub struct Workspace {
    invoker: RefinementInvoker,
    suggester: ParameterSuggester,
    clipboard: Box<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    state: WorkspaceState,
}

impl Workspace {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        clipboard: Box<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            invoker: RefinementInvoker::new(generator.clone()),
            suggester: ParameterSuggester::new(generator),
            clipboard,
            notifier,
            state: WorkspaceState::Idle,
        }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    /// Validate, acquire a token, then refine.
    ///
    /// Invalid input returns early with the state unchanged. Every later
    /// failure leaves the workspace in `Failed` and emits an error
    /// notification.
    pub async fn submit(
        &mut self,
        request: RefinementRequest,
        tokens: &dyn TokenSource,
    ) -> Result<String> {
        validate_refinement(&request)?;

        self.transition(WorkspaceState::Submitting)?;
        info!(
            with_parameters = request.instruction_mode().has_parameters(),
            "Refinement submitted"
        );

        if let Err(e) = acquire_token(tokens, REFINE_ACTION).await {
            warn!("Anti-abuse token unavailable: {}", e);
            return Err(self.fail(e.into()));
        }

        let result = match self.invoker.refine(&request).await {
            Ok(result) => result,
            Err(e) => return Err(self.fail(e.into())),
        };

        self.transition(WorkspaceState::Success {
            refined_prompt: result.refined_prompt.clone(),
        })?;

        let description = match self.clipboard.write_text(&result.refined_prompt) {
            Ok(()) => "Your refined prompt is ready and has been copied to the clipboard.",
            Err(e) => {
                warn!("Automatic clipboard copy failed: {}", e);
                "Your refined prompt is ready."
            }
        };
        self.notifier
            .notify(Notification::success("Prompt refined!", description));
        info!(len = result.refined_prompt.len(), "Refinement succeeded");

        Ok(result.refined_prompt)
    }

    /// Suggest style, length and tone for a basic prompt.
    ///
    /// Never changes the refinement state. Takes `&mut self` like `submit`
    /// so only one model call runs per workspace.
    pub async fn suggest(
        &mut self,
        request: SuggestionRequest,
        tokens: &dyn TokenSource,
    ) -> Result<ParameterSuggestion> {
        validate_suggestion(&request)?;

        let outcome = match acquire_token(tokens, SUGGEST_ACTION).await {
            Ok(_) => self
                .suggester
                .suggest(&request)
                .await
                .map_err(OrchestratorError::from),
            Err(e) => {
                warn!("Anti-abuse token unavailable: {}", e);
                Err(e.into())
            }
        };

        match outcome {
            Ok(suggestion) => {
                self.notifier.notify(Notification::info(
                    "Parameters suggested",
                    suggestion.reasoning.clone(),
                ));
                Ok(suggestion)
            }
            Err(err) => {
                let (title, description) = err.user_message();
                self.notifier.notify(Notification::error(title, description));
                Err(err)
            }
        }
    }

    /// Replace the refined prompt with the user's edited text.
    pub fn edit_result(&mut self, text: impl Into<String>) -> Result<()> {
        match &mut self.state {
            WorkspaceState::Success { refined_prompt } => {
                *refined_prompt = text.into();
                debug!("Refined prompt edited");
                Ok(())
            }
            _ => Err(OrchestratorError::NoResult),
        }
    }

    /// Copy the current result on explicit request. Unlike the automatic
    /// copy after a refinement, failures here are reported.
    pub fn copy_result(&mut self) -> Result<()> {
        let text = self
            .state
            .refined_prompt()
            .ok_or(OrchestratorError::NoResult)?
            .to_string();

        match self.clipboard.write_text(&text) {
            Ok(()) => {
                self.notifier.notify(Notification::success(
                    "Copied to clipboard!",
                    "The refined prompt has been copied.",
                ));
                Ok(())
            }
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                let err = OrchestratorError::Clipboard(e.to_string());
                let (title, description) = err.user_message();
                self.notifier.notify(Notification::error(title, description));
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) -> Result<()> {
        if self.state == WorkspaceState::Idle {
            return Ok(());
        }
        self.transition(WorkspaceState::Idle)
    }

    fn transition(&mut self, next: WorkspaceState) -> Result<()> {
        let from = self.state.phase();
        let to = next.phase();
        WorkspaceStateMachine::validate_transition(&from, &to)?;
        debug!("Workspace {} -> {}", from.as_str(), to.as_str());
        self.state = next;
        Ok(())
    }

    /// Move to `Failed`, dropping any stale result, and notify the user.
    fn fail(&mut self, err: OrchestratorError) -> OrchestratorError {
        let (title, description) = err.user_message();
        if let Err(transition_err) = self.transition(WorkspaceState::Failed {
            message: description.clone(),
        }) {
            return transition_err;
        }
        self.notifier.notify(Notification::error(title, description));
        err
    }
}

/// An `Ok` with a blank token still counts as a missing token.
async fn acquire_token(
    tokens: &dyn TokenSource,
    action: &str,
) -> std::result::Result<ActionToken, AntiAbuseError> {
    let token = tokens.acquire(action).await?;
    if token.token.trim().is_empty() {
        return Err(AntiAbuseError::MissingToken {
            action: action.to_string(),
        });
    }
    Ok(token)
}
