//! Auto-resume of a history message once the assistant's data is loaded

use crate::store::{Action, AssistantState};
use tracing::info;

/// Fires the replay of a pending sidebar message at most once per request
#[derive(Debug, Clone, Default)]
pub struct ResumeGuard {
    last_fired: Option<u64>,
}

impl ResumeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revision of the last request that was replayed
    pub fn last_fired(&self) -> Option<u64> {
        self.last_fired
    }

    /// Actions to replay the pending message, if it is due.
    ///
    /// Returns `None` when data is still loading, nothing is pending, or the
    /// current request has already been replayed.
    pub fn evaluate(&mut self, state: &AssistantState) -> Option<Vec<Action>> {
        let pending = &state.sidebar_message;
        if !state.data_loaded() || !pending.is_pending() {
            return None;
        }
        if self.last_fired == Some(pending.revision) {
            return None;
        }

        info!("Resuming history message (request {})", pending.revision);
        self.last_fired = Some(pending.revision);
        Some(vec![
            Action::ResetChat,
            Action::SetQuery(pending.text.clone()),
            Action::SetChatMode(true),
        ])
    }
}
