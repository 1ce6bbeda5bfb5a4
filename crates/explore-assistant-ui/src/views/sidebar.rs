//! Collapsible sidebar
//!
//! Menu toggle, "new chat", recent history and the settings trigger. All
//! decisions are made by [`SidebarController`]; this view wires clicks,
//! store observation and expansion timers to GPUI.

use super::SettingsDialog;
use crate::components::{svg_icon, IconName, IconSize, TextTooltip};
use crate::state::AppStore;
use crate::theme::{layout, rgb, rgba, Theme};
use explore_assistant_core::{
    ContainerWidthToggle, HistoryItem, HistoryRow, SidebarController, SidebarModel,
};
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::time::Instant;

/// Events the sidebar raises for its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Flip the container between its expanded and collapsed widths
    ToggleContainerWidth,
}

/// Forwards the container toggle to the parent as an event
struct EmitToggle<'a, 'b>(&'a mut ViewContext<'b, SidebarView>);

impl ContainerWidthToggle for EmitToggle<'_, '_> {
    fn toggle_container_width(&mut self) {
        self.0.emit(SidebarEvent::ToggleContainerWidth);
    }
}

pub struct SidebarView {
    theme: Theme,
    store: Model<AppStore>,
    controller: SidebarController,
    /// Pending expansion deadline; dropping it cancels the timer
    expansion_timer: Option<Task<()>>,
}

impl EventEmitter<SidebarEvent> for SidebarView {}

impl SidebarView {
    pub fn new(store: Model<AppStore>, theme: Theme, cx: &mut ViewContext<Self>) -> Self {
        let controller = SidebarController::from_settings(store.read(cx).settings());

        // Re-evaluate auto-resume after every store batch
        cx.observe(&store, |this, store, cx| {
            this.sync_with_store(&store, cx);
            cx.notify();
        })
        .detach();

        let mut view = Self {
            theme,
            store: store.clone(),
            controller,
            expansion_timer: None,
        };
        view.sync_with_store(&store, cx);
        view
    }

    /// Whether the container should currently use its expanded width
    pub fn container_expanded(&self) -> bool {
        self.controller.phase().container_expanded()
    }

    fn sync_with_store(&mut self, store: &Model<AppStore>, cx: &mut ViewContext<Self>) {
        let controller = &mut self.controller;
        store.update(cx, |store, cx| {
            if controller.sync(store) {
                cx.notify();
            }
        });
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    fn toggle_expansion(&mut self, cx: &mut ViewContext<Self>) {
        self.controller
            .toggle_expansion(Instant::now(), &mut EmitToggle(cx));
        self.schedule_expansion_timer(cx);
        cx.notify();
    }

    /// Drive the expansion state machine until it settles
    fn schedule_expansion_timer(&mut self, cx: &mut ViewContext<Self>) {
        let Some(deadline) = self.controller.next_deadline() else {
            self.expansion_timer = None;
            return;
        };

        self.expansion_timer = Some(cx.spawn(|view, mut cx| async move {
            let mut deadline = deadline;
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                cx.background_executor().timer(wait).await;

                let next = view.update(&mut cx, |this, cx| {
                    if this
                        .controller
                        .advance(Instant::now(), &mut EmitToggle(cx))
                    {
                        cx.notify();
                    }
                    this.controller.next_deadline()
                });

                match next {
                    Ok(Some(next)) => deadline = next,
                    _ => break,
                }
            }
        }));
    }

    fn start_new_chat(&mut self, cx: &mut ViewContext<Self>) {
        let controller = &self.controller;
        self.store.update(cx, |store, cx| {
            if controller.start_new_chat(store) {
                cx.notify();
            }
        });
    }

    fn select_history_item(&mut self, item: HistoryItem, cx: &mut ViewContext<Self>) {
        let controller = &self.controller;
        self.store.update(cx, |store, cx| {
            if controller.select_history_item(&item, store).is_ok() {
                cx.notify();
            }
        });
    }

    fn clear_history(&mut self, cx: &mut ViewContext<Self>) {
        let controller = &self.controller;
        self.store.update(cx, |store, cx| {
            controller.clear_history(store);
            cx.notify();
        });
    }

    fn open_settings(&mut self, cx: &mut ViewContext<Self>) {
        self.controller.open_settings();
        cx.notify();
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render_menu_button(&self, model: &SidebarModel, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div().p(px(self.theme.spacing.lg)).flex().items_center().child(
            div()
                .id("menu-toggle")
                .p(px(self.theme.spacing.sm))
                .rounded_full()
                .cursor_pointer()
                .hover(|s| s.bg(rgba(colors.hover)))
                .tooltip(TextTooltip::text(model.menu_tooltip))
                .on_click(cx.listener(|this, _, cx| this.toggle_expansion(cx)))
                .child(svg_icon(IconName::Menu, IconSize::Large).text_color(rgb(colors.text_secondary))),
        )
    }

    fn render_new_chat(&self, model: &SidebarModel, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let can_reset = model.can_reset;

        div().p(px(self.theme.spacing.lg)).flex().items_center().child(
            div()
                .id("new-chat")
                .p(px(self.theme.spacing.sm))
                .flex()
                .flex_row()
                .items_center()
                .rounded_full()
                .when(can_reset, |el| {
                    el.cursor_pointer()
                        .bg(rgb(colors.button_bg))
                        .text_color(rgb(colors.text_secondary))
                        .hover(|s| s.text_color(rgb(colors.text_primary)))
                })
                .when(!can_reset, |el| {
                    el.bg(rgb(colors.button_bg_disabled))
                        .text_color(rgb(colors.text_disabled))
                })
                .tooltip(TextTooltip::text("New Chat"))
                .on_click(cx.listener(|this, _, cx| this.start_new_chat(cx)))
                .child(svg_icon(IconName::Plus, IconSize::Large).text_color(if can_reset {
                    rgb(colors.text_secondary)
                } else {
                    rgb(colors.text_disabled)
                }))
                .when(model.labels_visible, |el| {
                    el.child(
                        div()
                            .mx(px(self.theme.spacing.md))
                            .whitespace_nowrap()
                            .text_sm()
                            .child("New Chat"),
                    )
                }),
        )
    }

    fn render_history(&self, model: &SidebarModel, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("history")
            .flex_1()
            .min_h_0()
            .overflow_y_scroll()
            .mt(px(self.theme.spacing.lg))
            .ml(px(self.theme.spacing.xl))
            .text_sm()
            .when(model.labels_visible, |el| {
                el.child(
                    div()
                        .mb(px(self.theme.spacing.lg))
                        .flex()
                        .flex_row()
                        .child(
                            div()
                                .flex_1()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(rgb(colors.text_primary))
                                .child("Recent"),
                        )
                        .when(model.show_clear, |el| {
                            el.child(
                                div()
                                    .id("clear-history")
                                    .px(px(self.theme.spacing.lg))
                                    .text_xs()
                                    .text_color(rgb(colors.text_muted))
                                    .cursor_pointer()
                                    .hover(|s| s.text_color(rgb(colors.text_secondary)))
                                    .on_click(cx.listener(|this, _, cx| this.clear_history(cx)))
                                    .child("clear"),
                            )
                        }),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(self.theme.spacing.lg))
                        .when(model.show_empty_state, |el| {
                            el.child(
                                div()
                                    .text_color(rgb(colors.text_muted))
                                    .child("No recent chats"),
                            )
                        })
                        .children(
                            model
                                .history
                                .iter()
                                .map(|row| self.render_history_row(row, cx)),
                        ),
                )
            })
    }

    fn render_history_row(&self, row: &HistoryRow, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let item = row.item.clone();
        let message = row.item.message.clone();

        div()
            .id(SharedString::from(format!("history-{}", row.index)))
            .h(px(layout::HISTORY_ITEM_HEIGHT))
            .flex()
            .items_center()
            .cursor_pointer()
            .hover(|s| s.text_color(rgb(colors.text_primary)))
            .text_color(rgb(colors.text_secondary))
            .tooltip(TextTooltip::text(message.clone()))
            .on_click(cx.listener(move |this, _, cx| {
                this.select_history_item(item.clone(), cx);
            }))
            .child(svg_icon(IconName::ChatBubble, IconSize::Small).text_color(rgb(colors.text_secondary)))
            .child(
                div()
                    .ml(px(self.theme.spacing.md))
                    .flex_1()
                    .min_w_0()
                    .whitespace_nowrap()
                    .text_ellipsis()
                    .child(message),
            )
    }

    fn render_settings_trigger(&self, model: &SidebarModel, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .mt_auto()
            .p(px(self.theme.spacing.lg))
            .border_t_1()
            .border_color(rgb(colors.border))
            .child(
                div()
                    .id("settings-trigger")
                    .p(px(self.theme.spacing.sm))
                    .flex()
                    .flex_row()
                    .items_center()
                    .cursor_pointer()
                    .text_color(rgb(colors.text_muted))
                    .when_some(model.settings_tooltip, |el, tooltip| {
                        el.tooltip(TextTooltip::text(tooltip))
                    })
                    .on_click(cx.listener(|this, _, cx| this.open_settings(cx)))
                    .child(svg_icon(IconName::Settings, IconSize::Large).text_color(rgb(colors.text_muted)))
                    .when(model.labels_visible, |el| {
                        el.child(
                            div()
                                .mx(px(self.theme.spacing.md))
                                .whitespace_nowrap()
                                .text_sm()
                                .child("Settings"),
                        )
                    }),
            )
    }
}

impl Render for SidebarView {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let store = self.store.read(cx);
        let model = self.controller.model(store.state());
        let settings = store.settings().clone();

        let view = cx.view().downgrade();
        let on_close = move |cx: &mut WindowContext| {
            let _ = view.update(cx, |this, cx| {
                this.controller.close_settings();
                cx.notify();
            });
        };

        div()
            .id("sidebar")
            .size_full()
            .overflow_hidden()
            .flex()
            .flex_col()
            .bg(rgb(colors.sidebar_bg))
            .shadow_md()
            .child(self.render_menu_button(&model, cx))
            .child(self.render_new_chat(&model, cx))
            .child(self.render_history(&model, cx))
            .child(self.render_settings_trigger(&model, cx))
            .child(SettingsDialog::new(
                model.settings_open,
                settings,
                self.theme.clone(),
                on_close,
            ))
    }
}
