//! SVG Icon component for consistent icon rendering
//!
//! Icons are stored in assets/icons/ as SVG files.

use gpui::*;

/// Icon names corresponding to SVG files in assets/icons/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Menu,
    Plus,
    ChatBubble,
    Settings,
    Close,
}

impl IconName {
    /// Get the path to the SVG file
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Menu => "icons/menu.svg",
            IconName::Plus => "icons/plus.svg",
            IconName::ChatBubble => "icons/chat_bubble.svg",
            IconName::Settings => "icons/settings.svg",
            IconName::Close => "icons/close.svg",
        }
    }
}

/// Standard icon sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IconSize {
    /// Small: 14px
    Small,
    /// Medium: 16px (default)
    #[default]
    Medium,
    /// Large: 20px
    Large,
}

impl IconSize {
    /// Get the size in pixels
    pub fn px(&self) -> f32 {
        match self {
            IconSize::Small => 14.0,
            IconSize::Medium => 16.0,
            IconSize::Large => 20.0,
        }
    }
}

/// Create an SVG icon element
///
/// # Example
/// ```ignore
/// svg_icon(IconName::Menu, IconSize::Large)
///     .text_color(rgb(colors.text_secondary))
/// ```
pub fn svg_icon(name: IconName, size: IconSize) -> Svg {
    svg()
        .path(name.path())
        .size(px(size.px()))
        .flex_shrink_0()
}
