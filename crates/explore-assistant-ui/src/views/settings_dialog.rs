//! Settings dialog
//!
//! A modal overlay controlled entirely by its owner through `open` and
//! `on_close`.

use crate::components::{svg_icon, IconName, IconSize};
use crate::theme::{layout, rgb, rgba, Theme};
use explore_assistant_core::SidebarSettings;
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::rc::Rc;

type CloseHandler = Rc<dyn Fn(&mut WindowContext)>;

#[derive(IntoElement)]
pub struct SettingsDialog {
    open: bool,
    settings: SidebarSettings,
    theme: Theme,
    on_close: CloseHandler,
}

impl SettingsDialog {
    pub fn new(
        open: bool,
        settings: SidebarSettings,
        theme: Theme,
        on_close: impl Fn(&mut WindowContext) + 'static,
    ) -> Self {
        Self {
            open,
            settings,
            theme,
            on_close: Rc::new(on_close),
        }
    }

    fn render_row(&self, label: &'static str, value: String) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .w_full()
            .py(px(6.0))
            .flex()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text_secondary))
                    .child(label),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.text_primary))
                    .child(value),
            )
    }
}

impl RenderOnce for SettingsDialog {
    fn render(self, cx: &mut WindowContext) -> impl IntoElement {
        let colors = self.theme.colors.clone();
        let on_backdrop = self.on_close.clone();
        let on_button = self.on_close.clone();
        let viewport = cx.viewport_size();

        // Anchored to the window so the owner's bounds do not clip the overlay
        div().when(self.open, |el| {
            el.child(deferred(anchored().position(point(px(0.0), px(0.0))).child(
                div()
                    .id("settings-backdrop")
                    .w(viewport.width)
                    .h(viewport.height)
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(rgba(colors.overlay))
                    .on_mouse_down(MouseButton::Left, move |_, cx| on_backdrop(cx))
                    .child(
                        div()
                            .id("settings-dialog")
                            .w(px(layout::DIALOG_WIDTH))
                            .bg(rgb(colors.surface_elevated))
                            .rounded(px(12.0))
                            .border_1()
                            .border_color(rgb(colors.border))
                            .shadow_lg()
                            .flex()
                            .flex_col()
                            // Clicks inside the dialog must not reach the backdrop
                            .on_mouse_down(MouseButton::Left, |_, cx| {
                                cx.stop_propagation();
                            })
                            .child(
                                div()
                                    .px(px(20.0))
                                    .py(px(16.0))
                                    .border_b_1()
                                    .border_color(rgb(colors.border))
                                    .flex()
                                    .items_center()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_lg()
                                            .font_weight(FontWeight::SEMIBOLD)
                                            .text_color(rgb(colors.text_primary))
                                            .child("Settings"),
                                    )
                                    .child(
                                        div()
                                            .id("settings-close")
                                            .p(px(4.0))
                                            .rounded(px(layout::BORDER_RADIUS))
                                            .cursor_pointer()
                                            .hover(|s| s.bg(rgba(colors.hover)))
                                            .on_click(move |_, cx| on_button(cx))
                                            .child(
                                                svg_icon(IconName::Close, IconSize::Medium)
                                                    .text_color(rgb(colors.text_secondary)),
                                            ),
                                    ),
                            )
                            .child(
                                div()
                                    .px(px(20.0))
                                    .py(px(12.0))
                                    .flex()
                                    .flex_col()
                                    .child(self.render_row(
                                        "Sidebar transition delay",
                                        format!("{} ms", self.settings.transition_delay_ms),
                                    ))
                                    .child(self.render_row(
                                        "Start expanded",
                                        if self.settings.start_expanded { "Yes" } else { "No" }
                                            .to_string(),
                                    ))
                                    .child(self.render_row(
                                        "History entries kept",
                                        self.settings.max_history.to_string(),
                                    )),
                            ),
                    ),
            )))
        })
    }
}
