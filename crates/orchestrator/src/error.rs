use std::fmt::Display;

use antiabuse::AntiAbuseError;
use promptcraft_core::ValidationErrors;
use thiserror::Error;

pub const REFINE_FAILED: &str = "Failed to refine prompt";
pub const SUGGEST_FAILED: &str = "Failed to suggest parameters";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// The model call failed or its answer broke the output contract.
#[derive(Debug, Error)]
#[error("{operation}: {reason}")]
pub struct ModelInvocationError {
    operation: &'static str,
    reason: String,
}

impl ModelInvocationError {
    pub fn refine(cause: impl Display) -> Self {
        Self::new(REFINE_FAILED, cause)
    }

    pub fn suggest(cause: impl Display) -> Self {
        Self::new(SUGGEST_FAILED, cause)
    }

    fn new(operation: &'static str, cause: impl Display) -> Self {
        let reason = cause.to_string();
        let reason = if reason.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            reason
        };
        Self { operation, reason }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Service unavailable: {0}")]
    AntiAbuse(#[from] AntiAbuseError),

    #[error(transparent)]
    ModelInvocation(#[from] ModelInvocationError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("No refined prompt available")]
    NoResult,

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl OrchestratorError {
    /// Title and description shown to the user for this error.
    pub fn user_message(&self) -> (&'static str, String) {
        match self {
            Self::Validation(errors) => ("Invalid input", errors.to_string()),
            Self::AntiAbuse(_) => (
                "Service unavailable",
                "Verification service is unavailable. Please try again later.".to_string(),
            ),
            Self::ModelInvocation(err) if err.operation() == SUGGEST_FAILED => {
                ("Suggestion failed", err.to_string())
            }
            Self::ModelInvocation(err) => ("Refinement failed", err.to_string()),
            Self::Clipboard(_) => ("Copy failed", "Could not copy to the clipboard.".to_string()),
            Self::NoResult => ("Nothing to copy", self.to_string()),
            Self::InvalidTransition { .. } => ("Unexpected error", UNKNOWN_ERROR.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_error_description() {
        let err = ModelInvocationError::refine("No completion returned");
        assert_eq!(err.to_string(), "Failed to refine prompt: No completion returned");
        assert_eq!(err.operation(), REFINE_FAILED);
    }

    #[test]
    fn test_blank_cause_is_unknown() {
        let err = ModelInvocationError::suggest("  ");
        assert_eq!(err.to_string(), "Failed to suggest parameters: An unknown error occurred");
    }

    #[test]
    fn test_anti_abuse_message_is_generic() {
        let err = OrchestratorError::from(AntiAbuseError::MissingToken {
            action: "refine_prompt".to_string(),
        });
        let (title, description) = err.user_message();
        assert_eq!(title, "Service unavailable");
        assert!(!description.contains("refine_prompt"));
    }
}
