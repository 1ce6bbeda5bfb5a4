//! Chat session state owned by the store

use crate::types::{HistoryItem, SidebarSettings};

/// A history message waiting to be replayed as a fresh chat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingMessage {
    /// Empty means nothing is pending
    pub text: String,
    /// Bumped on every request, so re-selecting the same item counts again
    pub revision: u64,
}

impl PendingMessage {
    pub fn is_pending(&self) -> bool {
        !self.text.is_empty()
    }
}

/// State of the assistant as seen by the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantState {
    pub is_chat_mode: bool,
    pub is_querying: bool,
    /// Insertion order, oldest first
    pub history: Vec<HistoryItem>,
    pub explore_id: String,
    pub explore_name: String,
    pub model_name: String,
    pub query: String,
    pub big_query_examples_loaded: bool,
    pub looker_fields_loaded: bool,
    pub sidebar_message: PendingMessage,
    /// Cap applied when appending history
    pub max_history: usize,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            is_chat_mode: false,
            is_querying: false,
            history: Vec::new(),
            explore_id: String::new(),
            explore_name: String::new(),
            model_name: String::new(),
            query: String::new(),
            big_query_examples_loaded: false,
            looker_fields_loaded: false,
            sidebar_message: PendingMessage::default(),
            max_history: SidebarSettings::default().max_history,
        }
    }
}

impl AssistantState {
    pub fn with_settings(settings: &SidebarSettings) -> Self {
        Self {
            max_history: settings.max_history,
            ..Self::default()
        }
    }

    /// A new chat may only be started from an idle conversation
    pub fn can_reset(&self) -> bool {
        self.is_chat_mode && !self.is_querying
    }

    /// Both datasets the assistant needs have been loaded
    pub fn data_loaded(&self) -> bool {
        self.big_query_examples_loaded && self.looker_fields_loaded
    }
}
