//! Main Explore Assistant window
//!
//! - Sidebar (320px / 64px): owned width, toggled by sidebar events
//! - MainPanel (flex-1): explore header + active query or suggestions

use explore_assistant_core::{AssistantState, Dispatch};
use explore_assistant_ui::theme::rgb;
use explore_assistant_ui::{layout, AppStore, SidebarEvent, SidebarView, Theme};
use gpui::prelude::FluentBuilder;
use gpui::*;
use tracing::{debug, info};

/// Explore used for suggestions before one has been chosen
const DEFAULT_EXPLORE_ID: &str = "thelook/order_items";

const SUGGESTED_QUESTIONS: &[&str] = &[
    "What were total sales over the last 12 months?",
    "Top 10 brands by revenue",
    "Orders by status this week",
    "Which product categories have the highest return rate?",
];

// ============================================================================
// Window State
// ============================================================================

pub struct AssistantWindow {
    theme: Theme,
    store: Model<AppStore>,
    sidebar: View<SidebarView>,
    /// Container width state, flipped on request from the sidebar
    sidebar_expanded: bool,
    focus_handle: FocusHandle,
}

impl AssistantWindow {
    pub fn new(store: Model<AppStore>, theme: Theme, cx: &mut ViewContext<Self>) -> Self {
        let sidebar = cx.new_view(|cx| SidebarView::new(store.clone(), theme.clone(), cx));
        let sidebar_expanded = sidebar.read(cx).container_expanded();

        cx.subscribe(&sidebar, |this, _, event: &SidebarEvent, cx| match event {
            SidebarEvent::ToggleContainerWidth => {
                this.sidebar_expanded = !this.sidebar_expanded;
                debug!("Sidebar container expanded: {}", this.sidebar_expanded);
                cx.notify();
            }
        })
        .detach();

        cx.observe(&store, |_, _, cx| cx.notify()).detach();

        // No remote loaders in the desktop shell; the sources are ready at once
        store.update(cx, |store, cx| {
            store.mark_data_sources_ready();
            cx.notify();
        });
        info!("Assistant window initialized");

        Self {
            theme,
            store,
            sidebar,
            sidebar_expanded,
            focus_handle: cx.focus_handle(),
        }
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    fn ask(&mut self, question: &'static str, cx: &mut ViewContext<Self>) {
        self.store.update(cx, |store, cx| {
            let explore_id = if store.state().explore_id.is_empty() {
                DEFAULT_EXPLORE_ID.to_string()
            } else {
                store.state().explore_id.clone()
            };
            store.ask(&explore_id, question);
            cx.notify();
        });
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render_header(&self, state: &AssistantState) -> impl IntoElement {
        let colors = &self.theme.colors;
        let title = if state.explore_name.is_empty() {
            "Explore Assistant".to_string()
        } else {
            state.explore_name.clone()
        };
        let subtitle = if state.model_name.is_empty() {
            DEFAULT_EXPLORE_ID.to_string()
        } else {
            format!("{} / {}", state.model_name, state.explore_name)
        };

        div()
            .px(px(self.theme.spacing.xl))
            .py(px(self.theme.spacing.lg))
            .border_b_1()
            .border_color(rgb(colors.border))
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.xs))
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(colors.text_primary))
                    .child(title),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text_muted))
                    .child(subtitle),
            )
    }

    fn render_active_query(&self, state: &AssistantState) -> impl IntoElement {
        let colors = &self.theme.colors;
        let status = if state.is_querying { "Running query..." } else { "Ready" };

        div()
            .p(px(self.theme.spacing.lg))
            .rounded(px(layout::BORDER_RADIUS))
            .bg(rgb(colors.surface_elevated))
            .border_1()
            .border_color(rgb(colors.border))
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.sm))
            .child(
                div()
                    .text_color(rgb(colors.text_primary))
                    .child(state.query.clone()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.text_muted))
                    .child(status),
            )
    }

    fn render_suggestions(&self, state: &AssistantState, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let ready = state.data_loaded();

        div()
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.md))
            .child(
                div()
                    .text_color(rgb(colors.text_secondary))
                    .child(if ready {
                        "Try one of these questions"
                    } else {
                        "Loading explore data..."
                    }),
            )
            .when(ready, |el| {
                el.children(SUGGESTED_QUESTIONS.iter().enumerate().map(|(i, &question)| {
                    div()
                        .id(SharedString::from(format!("suggestion-{}", i)))
                        .px(px(self.theme.spacing.lg))
                        .py(px(self.theme.spacing.md))
                        .rounded(px(layout::BORDER_RADIUS))
                        .bg(rgb(colors.button_bg))
                        .text_sm()
                        .text_color(rgb(colors.text_secondary))
                        .cursor_pointer()
                        .hover(|s| s.text_color(rgb(colors.text_primary)))
                        .on_click(cx.listener(move |this, _, cx| this.ask(question, cx)))
                        .child(question)
                }))
            })
    }

    fn render_main_panel(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let state = self.store.read(cx).state().clone();

        div()
            .flex_1()
            .h_full()
            .min_w_0()
            .flex()
            .flex_col()
            .bg(rgb(colors.panel_bg))
            .child(self.render_header(&state))
            .child(
                div()
                    .flex_1()
                    .p(px(self.theme.spacing.xl))
                    .flex()
                    .flex_col()
                    .when(state.is_chat_mode, |el| el.child(self.render_active_query(&state)))
                    .when(!state.is_chat_mode, |el| {
                        el.child(self.render_suggestions(&state, cx))
                    }),
            )
    }
}

impl FocusableView for AssistantWindow {
    fn focus_handle(&self, _cx: &AppContext) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for AssistantWindow {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("assistant-window")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_row()
            .bg(rgb(colors.panel_bg))
            .text_color(rgb(colors.text_primary))
            .child(
                div()
                    .w(px(layout::sidebar_width(self.sidebar_expanded)))
                    .flex_shrink_0()
                    .h_full()
                    .child(self.sidebar.clone()),
            )
            .child(self.render_main_panel(cx))
    }
}
