//! Plain text tooltip

use crate::theme::{rgb, Theme};
use gpui::*;

/// Tooltip view showing a single line of text
pub struct TextTooltip {
    text: SharedString,
    theme: Theme,
}

impl TextTooltip {
    /// Builder suitable for `.tooltip(...)` on stateful elements
    pub fn text(text: impl Into<SharedString>) -> impl Fn(&mut WindowContext) -> AnyView + 'static {
        let text = text.into();
        move |cx| {
            let text = text.clone();
            cx.new_view(|_| TextTooltip {
                text,
                theme: Theme::default(),
            })
            .into()
        }
    }
}

impl Render for TextTooltip {
    fn render(&mut self, _cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .max_w(px(280.0))
            .px(px(8.0))
            .py(px(4.0))
            .rounded(px(4.0))
            .bg(rgb(colors.text_secondary))
            .text_xs()
            .text_color(rgb(colors.panel_bg))
            .child(self.text.clone())
    }
}
