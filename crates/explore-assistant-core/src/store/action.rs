//! Store actions and effects

use crate::types::HistoryItem;
use serde::{Deserialize, Serialize};

/// State-update events accepted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// Clear the current conversation and leave chat mode
    ResetChat,
    SetChatMode(bool),
    SetQuery(String),
    /// Full `<model>/<explore>` id
    SetExploreId(String),
    SetExploreName(String),
    SetModelName(String),
    /// Request that a history message be replayed once data is loaded
    SetSidebarMessage(String),
    ClearHistory,
    AddToHistory(HistoryItem),
    SetQuerying(bool),
    SetBigQueryExamplesLoaded(bool),
    SetLookerFieldsLoaded(bool),
    /// Replace the history wholesale (hydration from storage)
    ReplaceHistory(Vec<HistoryItem>),
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::ResetChat => "reset-chat",
            Action::SetChatMode(_) => "set-chat-mode",
            Action::SetQuery(_) => "set-query",
            Action::SetExploreId(_) => "set-explore-id",
            Action::SetExploreName(_) => "set-explore-name",
            Action::SetModelName(_) => "set-model-name",
            Action::SetSidebarMessage(_) => "set-sidebar-message",
            Action::ClearHistory => "clear-history",
            Action::AddToHistory(_) => "add-to-history",
            Action::SetQuerying(_) => "set-querying",
            Action::SetBigQueryExamplesLoaded(_) => "set-big-query-examples-loaded",
            Action::SetLookerFieldsLoaded(_) => "set-looker-fields-loaded",
            Action::ReplaceHistory(_) => "replace-history",
        }
    }
}

/// Side effects requested by the reducer, applied by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// An item became the newest history entry (older duplicates dropped)
    HistoryAppended { item: HistoryItem, keep: usize },
    /// History was emptied
    HistoryCleared,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_value(Action::SetExploreName("sales".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "set-explore-name", "payload": "sales" })
        );

        let json = serde_json::to_value(Action::ResetChat).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "reset-chat" }));
    }

    #[test]
    fn test_action_name_matches_wire_tag() {
        let actions = vec![
            Action::ResetChat,
            Action::SetChatMode(true),
            Action::SetSidebarMessage("m1".to_string()),
            Action::AddToHistory(HistoryItem::new("m/e", "q")),
            Action::SetLookerFieldsLoaded(false),
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.name());
        }
    }
}
