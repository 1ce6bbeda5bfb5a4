//! Pure reducer for the assistant store

use super::{Action, AssistantState, Effect};
use crate::types::HistoryItem;

/// Apply one action to the state, returning the effects it requires
pub fn reduce(state: &mut AssistantState, action: Action) -> Vec<Effect> {
    match action {
        Action::ResetChat => {
            state.query.clear();
            state.is_chat_mode = false;
            state.is_querying = false;
            Vec::new()
        }
        Action::SetChatMode(on) => {
            state.is_chat_mode = on;
            Vec::new()
        }
        Action::SetQuery(query) => {
            state.query = query;
            Vec::new()
        }
        Action::SetExploreId(id) => {
            state.explore_id = id;
            Vec::new()
        }
        Action::SetExploreName(name) => {
            state.explore_name = name;
            Vec::new()
        }
        Action::SetModelName(name) => {
            state.model_name = name;
            Vec::new()
        }
        Action::SetSidebarMessage(text) => {
            state.sidebar_message.text = text;
            state.sidebar_message.revision += 1;
            Vec::new()
        }
        Action::ClearHistory => {
            state.history.clear();
            vec![Effect::HistoryCleared]
        }
        Action::AddToHistory(item) => handle_add_to_history(state, item),
        Action::SetQuerying(on) => {
            state.is_querying = on;
            Vec::new()
        }
        Action::SetBigQueryExamplesLoaded(loaded) => {
            state.big_query_examples_loaded = loaded;
            Vec::new()
        }
        Action::SetLookerFieldsLoaded(loaded) => {
            state.looker_fields_loaded = loaded;
            Vec::new()
        }
        Action::ReplaceHistory(items) => {
            state.history = items;
            truncate_oldest(&mut state.history, state.max_history);
            Vec::new()
        }
    }
}

fn handle_add_to_history(state: &mut AssistantState, item: HistoryItem) -> Vec<Effect> {
    state.history.retain(|existing| !existing.same_entry(&item));
    state.history.push(item.clone());
    truncate_oldest(&mut state.history, state.max_history);

    vec![Effect::HistoryAppended {
        item,
        keep: state.max_history,
    }]
}

fn truncate_oldest(history: &mut Vec<HistoryItem>, keep: usize) {
    if history.len() > keep {
        let excess = history.len() - keep;
        history.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, message: &str) -> HistoryItem {
        HistoryItem::new(id, message)
    }

    #[test]
    fn test_reset_chat_clears_conversation() {
        let mut state = AssistantState {
            is_chat_mode: true,
            is_querying: true,
            query: "top products".to_string(),
            explore_id: "m/e".to_string(),
            ..AssistantState::default()
        };

        let effects = reduce(&mut state, Action::ResetChat);

        assert!(effects.is_empty());
        assert!(!state.is_chat_mode);
        assert!(!state.is_querying);
        assert_eq!(state.query, "");
        // Explore selection survives a reset
        assert_eq!(state.explore_id, "m/e");
    }

    #[test]
    fn test_sidebar_message_bumps_revision() {
        let mut state = AssistantState::default();
        reduce(&mut state, Action::SetSidebarMessage("m1".to_string()));
        reduce(&mut state, Action::SetSidebarMessage("m1".to_string()));

        assert_eq!(state.sidebar_message.text, "m1");
        assert_eq!(state.sidebar_message.revision, 2);
    }

    #[test]
    fn test_add_to_history_moves_duplicates_to_newest() {
        let mut state = AssistantState::default();
        reduce(&mut state, Action::AddToHistory(item("m/a", "q1")));
        reduce(&mut state, Action::AddToHistory(item("m/b", "q2")));
        let effects = reduce(&mut state, Action::AddToHistory(item("m/a", "q1")));

        assert_eq!(state.history, vec![item("m/b", "q2"), item("m/a", "q1")]);
        assert_eq!(
            effects,
            vec![Effect::HistoryAppended {
                item: item("m/a", "q1"),
                keep: 50
            }]
        );
    }

    #[test]
    fn test_add_to_history_respects_cap() {
        let mut state = AssistantState {
            max_history: 2,
            ..AssistantState::default()
        };
        for n in 0..4 {
            reduce(&mut state, Action::AddToHistory(item("m/e", &format!("q{}", n))));
        }

        assert_eq!(state.history, vec![item("m/e", "q2"), item("m/e", "q3")]);
    }

    #[test]
    fn test_clear_history() {
        let mut state = AssistantState::default();
        reduce(&mut state, Action::AddToHistory(item("m/e", "q")));

        let effects = reduce(&mut state, Action::ClearHistory);

        assert!(state.history.is_empty());
        assert_eq!(effects, vec![Effect::HistoryCleared]);
    }

    #[test]
    fn test_replace_history_has_no_effects() {
        let mut state = AssistantState::default();
        let effects = reduce(
            &mut state,
            Action::ReplaceHistory(vec![item("m/a", "q1"), item("m/b", "q2")]),
        );

        assert!(effects.is_empty());
        assert_eq!(state.history.len(), 2);
    }
}
