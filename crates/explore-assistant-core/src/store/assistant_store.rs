//! In-memory store with batched dispatch

use super::{reduce, Action, AssistantState, Effect};
use tracing::debug;

/// State-and-dispatch seam the sidebar is written against
pub trait Dispatch {
    /// Current state snapshot
    fn state(&self) -> &AssistantState;

    /// Apply a batch of actions as one update.
    ///
    /// Observers must only see the state after the whole batch.
    fn dispatch_batch(&mut self, actions: Vec<Action>);

    fn dispatch(&mut self, action: Action) {
        self.dispatch_batch(vec![action]);
    }
}

/// The assistant's shared store
#[derive(Debug, Default)]
pub struct AssistantStore {
    state: AssistantState,
    /// Effects not yet taken by the persistence layer
    effects: Vec<Effect>,
    /// Number of batches applied
    revision: u64,
}

impl AssistantStore {
    pub fn new(state: AssistantState) -> Self {
        Self {
            state,
            effects: Vec::new(),
            revision: 0,
        }
    }

    /// Number of batches applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drain pending effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn has_pending_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

impl Dispatch for AssistantStore {
    fn state(&self) -> &AssistantState {
        &self.state
    }

    fn dispatch_batch(&mut self, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }

        for action in actions {
            debug!("Dispatching {}", action.name());
            let effects = reduce(&mut self.state, action);
            self.effects.extend(effects);
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HistoryItem;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_batch_counts_as_one_revision() {
        let mut store = AssistantStore::default();
        store.dispatch_batch(vec![
            Action::SetExploreId("gemini/sales".to_string()),
            Action::SetExploreName("sales".to_string()),
            Action::SetModelName("gemini".to_string()),
        ]);

        assert_eq!(store.revision(), 1);
        assert_eq!(store.state().explore_id, "gemini/sales");
        assert_eq!(store.state().explore_name, "sales");
        assert_eq!(store.state().model_name, "gemini");
    }

    #[test]
    fn test_empty_batch_is_ignored() {
        let mut store = AssistantStore::default();
        store.dispatch_batch(Vec::new());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_effects_are_drained_once() {
        let mut store = AssistantStore::default();
        store.dispatch(Action::AddToHistory(HistoryItem::new("m/e", "q")));
        store.dispatch(Action::ClearHistory);

        assert!(store.has_pending_effects());
        assert_eq!(store.take_effects().len(), 2);
        assert!(store.take_effects().is_empty());
    }
}
