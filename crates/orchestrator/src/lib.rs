pub mod clipboard;
pub mod error;
pub mod invoker;
pub mod notify;
pub mod state_machine;
pub mod suggester;
pub mod workspace;

#[cfg(test)]
mod testing;

pub use clipboard::{ClientSideClipboard, Clipboard, ClipboardError};
pub use error::{ModelInvocationError, OrchestratorError, Result};
pub use invoker::RefinementInvoker;
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier};
pub use state_machine::{WorkspacePhase, WorkspaceState, WorkspaceStateMachine};
pub use suggester::ParameterSuggester;
pub use workspace::{Workspace, REFINE_ACTION, SUGGEST_ACTION};
