//! Theme system for the Explore Assistant
//!
//! Provides color definitions, spacing and layout constants.

mod colors;

pub use colors::*;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub spacing: Spacing,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            colors: ThemeColors::light(),
            spacing: Spacing::default(),
        }
    }
}

/// Spacing constants
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (12px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Extra large spacing (24px)
    pub xl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Sidebar width when expanded
    pub const SIDEBAR_EXPANDED_WIDTH: f32 = 320.0;
    /// Sidebar width when collapsed to icons
    pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;
    /// History row height
    pub const HISTORY_ITEM_HEIGHT: f32 = 28.0;
    /// Settings dialog width
    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const BORDER_RADIUS: f32 = 6.0;

    /// Container width for the given expansion state
    pub fn sidebar_width(expanded: bool) -> f32 {
        if expanded {
            SIDEBAR_EXPANDED_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        }
    }
}

/// Opaque GPUI color
pub fn rgb(c: Rgba) -> gpui::Rgba {
    gpui::Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: 1.0,
    }
}

/// GPUI color keeping alpha
pub fn rgba(c: Rgba) -> gpui::Rgba {
    gpui::Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_width() {
        assert_eq!(layout::sidebar_width(true), 320.0);
        assert_eq!(layout::sidebar_width(false), 64.0);
    }

    #[test]
    fn test_rgb_drops_alpha() {
        let c = Rgba::rgb(0x102030).with_alpha(0.5);
        assert_eq!(rgb(c).a, 1.0);
        assert_eq!(rgba(c).a, 0.5);
    }
}
