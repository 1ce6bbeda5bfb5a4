//! Application store shared between the sidebar and the main panel

use explore_assistant_core::{
    storage, Action, AssistantState, AssistantStore, Dispatch, HistoryItem, SidebarSettings,
    Storage,
};
use std::sync::Arc;
use tracing::{error, info};

/// The assistant store plus its persistence.
///
/// Wrapped in a GPUI `Model`; every dispatch batch is followed by a single
/// `notify`, so observers only ever see a fully applied batch.
pub struct AppStore {
    store: AssistantStore,
    storage: Option<Arc<Storage>>,
    settings: SidebarSettings,
}

impl AppStore {
    /// Create a store backed by storage, hydrating the persisted history
    pub fn load(storage: Arc<Storage>, settings: SidebarSettings) -> Self {
        let history = match storage
            .connection()
            .and_then(|conn| storage::list_history(&conn))
        {
            Ok(history) => history,
            Err(e) => {
                error!("Failed to load history: {}", e);
                Vec::new()
            }
        };
        info!("Loaded {} history entries", history.len());

        let mut store = AssistantStore::new(AssistantState::with_settings(&settings));
        store.dispatch(Action::ReplaceHistory(history));

        Self {
            store,
            storage: Some(storage),
            settings,
        }
    }

    /// Store without persistence
    pub fn in_memory(settings: SidebarSettings) -> Self {
        Self {
            store: AssistantStore::new(AssistantState::with_settings(&settings)),
            storage: None,
            settings,
        }
    }

    pub fn settings(&self) -> &SidebarSettings {
        &self.settings
    }

    /// The example and field loaders have finished
    pub fn mark_data_sources_ready(&mut self) {
        self.dispatch_batch(vec![
            Action::SetBigQueryExamplesLoaded(true),
            Action::SetLookerFieldsLoaded(true),
        ]);
    }

    /// Start a chat for a question and remember it in history
    pub fn ask(&mut self, composite_explore_id: &str, question: &str) {
        self.dispatch_batch(vec![
            Action::ResetChat,
            Action::SetQuery(question.to_string()),
            Action::SetChatMode(true),
            Action::AddToHistory(HistoryItem::new(composite_explore_id, question)),
        ]);
    }

    fn persist_effects(&mut self) {
        let effects = self.store.take_effects();
        let Some(storage) = &self.storage else {
            return;
        };
        if effects.is_empty() {
            return;
        }

        let result = storage
            .connection()
            .and_then(|conn| storage::apply_effects(&conn, &effects));
        if let Err(e) = result {
            error!("Failed to persist history: {}", e);
        }
    }
}

impl Dispatch for AppStore {
    fn state(&self) -> &AssistantState {
        self.store.state()
    }

    fn dispatch_batch(&mut self, actions: Vec<Action>) {
        self.store.dispatch_batch(actions);
        self.persist_effects();
    }
}
