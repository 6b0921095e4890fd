use serde::{Deserialize, Serialize};

use crate::error::{OrchestratorError, Result};

/// Where a workspace is in its refinement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum WorkspacePhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl WorkspacePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// Observable workspace state, carrying the result or failure message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WorkspaceState {
    #[default]
    Idle,
    Submitting,
    Success { refined_prompt: String },
    Failed { message: String },
}

impl WorkspaceState {
    pub fn phase(&self) -> WorkspacePhase {
        match self {
            Self::Idle => WorkspacePhase::Idle,
            Self::Submitting => WorkspacePhase::Submitting,
            Self::Success { .. } => WorkspacePhase::Success,
            Self::Failed { .. } => WorkspacePhase::Failed,
        }
    }

    pub fn refined_prompt(&self) -> Option<&str> {
        match self {
            Self::Success { refined_prompt } => Some(refined_prompt),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

pub struct WorkspaceStateMachine;

impl WorkspaceStateMachine {
    pub fn validate_transition(from: &WorkspacePhase, to: &WorkspacePhase) -> Result<()> {
        let allowed = Self::allowed_transitions(from);

        if allowed.contains(to) {
            Ok(())
        } else {
            Err(OrchestratorError::InvalidTransition {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }

    fn allowed_transitions(from: &WorkspacePhase) -> Vec<WorkspacePhase> {
        match from {
            WorkspacePhase::Idle => vec![WorkspacePhase::Submitting],
            WorkspacePhase::Submitting => vec![WorkspacePhase::Success, WorkspacePhase::Failed],
            WorkspacePhase::Success => vec![WorkspacePhase::Submitting, WorkspacePhase::Idle],
            WorkspacePhase::Failed => vec![WorkspacePhase::Submitting, WorkspacePhase::Idle],
        }
    }

    pub fn can_transition(from: &WorkspacePhase, to: &WorkspacePhase) -> bool {
        Self::validate_transition(from, to).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Idle,
            &WorkspacePhase::Submitting
        ));
        assert!(WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Submitting,
            &WorkspacePhase::Success
        ));
        assert!(WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Submitting,
            &WorkspacePhase::Failed
        ));
    }

    #[test]
    fn test_resubmit_from_terminal_states() {
        assert!(WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Success,
            &WorkspacePhase::Submitting
        ));
        assert!(WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Failed,
            &WorkspacePhase::Submitting
        ));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Idle,
            &WorkspacePhase::Success
        ));
        assert!(!WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Submitting,
            &WorkspacePhase::Submitting
        ));
        assert!(!WorkspaceStateMachine::can_transition(
            &WorkspacePhase::Submitting,
            &WorkspacePhase::Idle
        ));
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let state = WorkspaceState::Success {
            refined_prompt: "text".to_string(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["refined_prompt"], "text");
        assert!(state.phase().is_terminal());
    }
}
