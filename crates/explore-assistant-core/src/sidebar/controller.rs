//! Sidebar controller
//!
//! Translates sidebar clicks into store actions and owns the sidebar's local
//! UI state. The store is injected through [`Dispatch`], so the controller
//! can be driven by the real store or a recording one in tests.

use super::{ContainerWidthToggle, ExpansionAnimator, ExpansionPhase, ResumeGuard};
use crate::error::ExploreIdError;
use crate::store::{Action, AssistantState, Dispatch};
use crate::types::{ExploreId, HistoryItem, SidebarSettings};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A history entry as rendered, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Position in storage order
    pub index: usize,
    pub item: HistoryItem,
}

/// Everything the sidebar needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    pub container_expanded: bool,
    pub labels_visible: bool,
    pub can_reset: bool,
    pub history: Vec<HistoryRow>,
    pub show_empty_state: bool,
    pub show_clear: bool,
    pub settings_open: bool,
    pub menu_tooltip: &'static str,
    /// Only shown while collapsed
    pub settings_tooltip: Option<&'static str>,
}

/// Sidebar state and intent handling
#[derive(Debug, Clone)]
pub struct SidebarController {
    expansion: ExpansionAnimator,
    settings_open: bool,
    resume: ResumeGuard,
}

impl SidebarController {
    pub fn new(expanded: bool, delay: Duration) -> Self {
        Self {
            expansion: ExpansionAnimator::new(expanded, delay),
            settings_open: false,
            resume: ResumeGuard::new(),
        }
    }

    pub fn from_settings(settings: &SidebarSettings) -> Self {
        Self::new(settings.start_expanded, settings.transition_delay())
    }

    // ========================================================================
    // Expansion
    // ========================================================================

    pub fn phase(&self) -> ExpansionPhase {
        self.expansion.phase()
    }

    pub fn toggle_expansion(&mut self, now: Instant, container: &mut dyn ContainerWidthToggle) {
        self.expansion.toggle(now, container);
    }

    /// Complete a due expansion transition; true if anything changed
    pub fn advance(&mut self, now: Instant, container: &mut dyn ContainerWidthToggle) -> bool {
        self.expansion.advance(now, container)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.expansion.next_deadline()
    }

    // ========================================================================
    // Store intents
    // ========================================================================

    /// Reset the conversation if one is active and idle.
    ///
    /// Returns whether a reset was dispatched.
    pub fn start_new_chat<S: Dispatch + ?Sized>(&self, store: &mut S) -> bool {
        if !store.state().can_reset() {
            debug!("Ignoring new chat: no idle conversation to reset");
            return false;
        }

        store.dispatch(Action::ResetChat);
        true
    }

    /// Restore the explore context of a history item and request its replay
    pub fn select_history_item<S: Dispatch + ?Sized>(
        &self,
        item: &HistoryItem,
        store: &mut S,
    ) -> Result<ExploreId, ExploreIdError> {
        let explore_id = match item.explore_id() {
            Ok(id) => id,
            Err(e) => {
                warn!("Ignoring history item: {}", e);
                return Err(e);
            }
        };

        info!("Restoring history item for {}", explore_id);
        store.dispatch_batch(vec![
            Action::SetExploreId(item.composite_explore_id.clone()),
            Action::SetExploreName(explore_id.explore.clone()),
            Action::SetModelName(explore_id.model.clone()),
            Action::SetSidebarMessage(item.message.clone()),
        ]);

        Ok(explore_id)
    }

    pub fn clear_history<S: Dispatch + ?Sized>(&self, store: &mut S) {
        info!("Clearing history");
        store.dispatch(Action::ClearHistory);
    }

    /// Re-evaluate the auto-resume rule after a store change.
    ///
    /// Returns whether a replay was dispatched.
    pub fn sync<S: Dispatch + ?Sized>(&mut self, store: &mut S) -> bool {
        match self.resume.evaluate(store.state()) {
            Some(actions) => {
                store.dispatch_batch(actions);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Settings dialog
    // ========================================================================

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn model(&self, state: &AssistantState) -> SidebarModel {
        let phase = self.expansion.phase();
        let container_expanded = phase.container_expanded();
        let history: Vec<HistoryRow> = state
            .history
            .iter()
            .enumerate()
            .rev()
            .map(|(index, item)| HistoryRow {
                index,
                item: item.clone(),
            })
            .collect();

        SidebarModel {
            container_expanded,
            labels_visible: phase.labels_visible(),
            can_reset: state.can_reset(),
            show_empty_state: history.is_empty(),
            show_clear: !history.is_empty(),
            history,
            settings_open: self.settings_open,
            menu_tooltip: if container_expanded {
                "Collapse Menu"
            } else {
                "Expand Menu"
            },
            settings_tooltip: if container_expanded {
                None
            } else {
                Some("Settings")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::MockContainerWidthToggle;
    use crate::store::AssistantStore;
    use pretty_assertions::assert_eq;

    const DELAY: Duration = Duration::from_millis(100);

    /// Store double that records every batch it receives
    #[derive(Default)]
    struct RecordingStore {
        inner: AssistantStore,
        batches: Vec<Vec<Action>>,
    }

    impl RecordingStore {
        fn with_state(state: AssistantState) -> Self {
            Self {
                inner: AssistantStore::new(state),
                batches: Vec::new(),
            }
        }

        fn actions(&self) -> Vec<Action> {
            self.batches.iter().flatten().cloned().collect()
        }
    }

    impl Dispatch for RecordingStore {
        fn state(&self) -> &AssistantState {
            self.inner.state()
        }

        fn dispatch_batch(&mut self, actions: Vec<Action>) {
            self.batches.push(actions.clone());
            self.inner.dispatch_batch(actions);
        }
    }

    fn chat_state(is_chat_mode: bool, is_querying: bool) -> AssistantState {
        AssistantState {
            is_chat_mode,
            is_querying,
            ..AssistantState::default()
        }
    }

    #[test]
    fn test_new_chat_guard() {
        let controller = SidebarController::new(true, DELAY);

        for (chat, querying) in [(false, false), (false, true), (true, true)] {
            let mut store = RecordingStore::with_state(chat_state(chat, querying));
            assert!(!controller.start_new_chat(&mut store));
            assert!(store.batches.is_empty());
        }

        let mut store = RecordingStore::with_state(chat_state(true, false));
        assert!(controller.start_new_chat(&mut store));
        assert_eq!(store.batches, vec![vec![Action::ResetChat]]);
    }

    #[test]
    fn test_select_history_item_dispatches_one_batch() {
        let controller = SidebarController::new(true, DELAY);
        let mut store = RecordingStore::default();
        let item = HistoryItem::new("gemini/sales_explore", "m1");

        let id = controller.select_history_item(&item, &mut store).unwrap();

        assert_eq!(id, ExploreId::new("gemini", "sales_explore"));
        assert_eq!(
            store.batches,
            vec![vec![
                Action::SetExploreId("gemini/sales_explore".to_string()),
                Action::SetExploreName("sales_explore".to_string()),
                Action::SetModelName("gemini".to_string()),
                Action::SetSidebarMessage("m1".to_string()),
            ]]
        );
        assert_eq!(store.inner.revision(), 1);
    }

    #[test]
    fn test_select_malformed_history_item_dispatches_nothing() {
        let controller = SidebarController::new(true, DELAY);
        let mut store = RecordingStore::default();
        let item = HistoryItem::new("no_separator", "m1");

        let err = controller.select_history_item(&item, &mut store).unwrap_err();

        assert_eq!(err, ExploreIdError::MissingSeparator("no_separator".to_string()));
        assert!(store.batches.is_empty());
    }

    #[test]
    fn test_clear_history() {
        let controller = SidebarController::new(true, DELAY);
        let mut store = RecordingStore::default();
        store.dispatch(Action::AddToHistory(HistoryItem::new("m/e", "q")));
        store.batches.clear();

        controller.clear_history(&mut store);

        assert_eq!(store.batches, vec![vec![Action::ClearHistory]]);
        assert!(store.state().history.is_empty());
    }

    #[test]
    fn test_auto_resume_fires_once_after_data_loads() {
        let mut controller = SidebarController::new(true, DELAY);
        let mut store = RecordingStore::default();

        controller
            .select_history_item(&HistoryItem::new("gemini/sales_explore", "m1"), &mut store)
            .unwrap();
        assert!(!controller.sync(&mut store));

        store.dispatch(Action::SetBigQueryExamplesLoaded(true));
        assert!(!controller.sync(&mut store));

        store.dispatch(Action::SetLookerFieldsLoaded(true));
        store.batches.clear();
        assert!(controller.sync(&mut store));
        assert_eq!(
            store.actions(),
            vec![
                Action::ResetChat,
                Action::SetQuery("m1".to_string()),
                Action::SetChatMode(true),
            ]
        );
        assert!(store.state().is_chat_mode);
        assert_eq!(store.state().query, "m1");

        // Unrelated change while the message stays "m1"
        store.batches.clear();
        store.dispatch(Action::SetQuerying(true));
        store.dispatch(Action::SetQuerying(false));
        assert!(!controller.sync(&mut store));
        assert_eq!(
            store.actions(),
            vec![Action::SetQuerying(true), Action::SetQuerying(false)]
        );
    }

    #[test]
    fn test_reselecting_same_item_replays_again() {
        let mut controller = SidebarController::new(true, DELAY);
        let mut store = RecordingStore::with_state(AssistantState {
            big_query_examples_loaded: true,
            looker_fields_loaded: true,
            ..AssistantState::default()
        });
        let item = HistoryItem::new("gemini/sales_explore", "m1");

        controller.select_history_item(&item, &mut store).unwrap();
        assert!(controller.sync(&mut store));

        controller.select_history_item(&item, &mut store).unwrap();
        assert!(controller.sync(&mut store));
        assert!(!controller.sync(&mut store));
    }

    #[test]
    fn test_history_rendered_newest_first() {
        let controller = SidebarController::new(true, DELAY);
        let state = AssistantState {
            history: vec![
                HistoryItem::new("m/e", "A"),
                HistoryItem::new("m/e", "B"),
                HistoryItem::new("m/e", "C"),
            ],
            ..AssistantState::default()
        };

        let model = controller.model(&state);
        let messages: Vec<&str> = model.history.iter().map(|r| r.item.message.as_str()).collect();

        assert_eq!(messages, vec!["C", "B", "A"]);
        assert_eq!(model.history[0].index, 2);
    }

    #[test]
    fn test_empty_state_and_clear_affordance() {
        let controller = SidebarController::new(true, DELAY);

        let model = controller.model(&AssistantState::default());
        assert!(model.show_empty_state);
        assert!(!model.show_clear);

        let state = AssistantState {
            history: vec![HistoryItem::new("m/e", "X")],
            ..AssistantState::default()
        };
        let model = controller.model(&state);
        assert!(!model.show_empty_state);
        assert!(model.show_clear);
    }

    #[test]
    fn test_toggle_from_collapsed_reaches_expanded_after_delay() {
        let start = Instant::now();
        let mut container = MockContainerWidthToggle::new();
        container.expect_toggle_container_width().times(1).return_const(());
        let mut controller = SidebarController::new(false, DELAY);
        let state = AssistantState::default();

        controller.toggle_expansion(start, &mut container);
        assert_eq!(controller.phase(), ExpansionPhase::Expanding);
        let model = controller.model(&state);
        assert!(model.container_expanded);
        assert!(!model.labels_visible);

        assert!(!controller.advance(start + DELAY / 2, &mut container));
        assert!(controller.advance(start + DELAY, &mut container));
        assert_eq!(controller.phase(), ExpansionPhase::Expanded);
        assert!(controller.model(&state).labels_visible);
    }

    #[test]
    fn test_settings_dialog_and_tooltips() {
        let mut controller = SidebarController::new(false, DELAY);
        let state = AssistantState::default();

        let model = controller.model(&state);
        assert!(!model.settings_open);
        assert_eq!(model.menu_tooltip, "Expand Menu");
        assert_eq!(model.settings_tooltip, Some("Settings"));

        controller.open_settings();
        assert!(controller.model(&state).settings_open);
        controller.close_settings();
        assert!(!controller.is_settings_open());

        let expanded = SidebarController::new(true, DELAY).model(&state);
        assert_eq!(expanded.menu_tooltip, "Collapse Menu");
        assert_eq!(expanded.settings_tooltip, None);
    }

    #[test]
    fn test_from_settings() {
        let settings = SidebarSettings {
            start_expanded: false,
            ..SidebarSettings::default()
        };
        let controller = SidebarController::from_settings(&settings);
        assert_eq!(controller.phase(), ExpansionPhase::Collapsed);
    }
}
