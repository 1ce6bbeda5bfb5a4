//! Color definitions for the Explore Assistant theme

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create with alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    pub sidebar_bg: Rgba,
    pub panel_bg: Rgba,
    /// Dialog background
    pub surface_elevated: Rgba,
    /// Modal backdrop
    pub overlay: Rgba,

    // === Buttons ===
    /// "New chat" pill when a reset is possible
    pub button_bg: Rgba,
    /// "New chat" pill when disabled
    pub button_bg_disabled: Rgba,

    // === Text Colors ===
    pub text_primary: Rgba,
    pub text_secondary: Rgba,
    pub text_muted: Rgba,
    pub text_disabled: Rgba,

    // === UI Elements ===
    pub border: Rgba,
    pub hover: Rgba,
    pub primary: Rgba,
}

impl ThemeColors {
    /// Light palette used by the assistant
    pub fn light() -> Self {
        Self {
            sidebar_bg: Rgba::rgb(0xf0f4f9),
            panel_bg: Rgba::rgb(0xffffff),
            surface_elevated: Rgba::rgb(0xffffff),
            overlay: Rgba::rgb(0x1f1f1f).with_alpha(0.4),

            button_bg: Rgba::rgb(0xd1d5db),      // gray-300
            button_bg_disabled: Rgba::rgb(0xe5e7eb), // gray-200

            text_primary: Rgba::rgb(0x1f1f1f),
            text_secondary: Rgba::rgb(0x4b5563), // gray-600
            text_muted: Rgba::rgb(0x9ca3af),     // gray-400
            text_disabled: Rgba::rgb(0x9ca3af),

            border: Rgba::rgb(0xe5e7eb),
            hover: Rgba::rgb(0x1f1f1f).with_alpha(0.06),
            primary: Rgba::rgb(0x1a73e8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        let c = Rgba::rgb(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_with_alpha() {
        let c = Rgba::rgb(0x000000).with_alpha(0.25);
        assert_eq!(c.a, 0.25);
    }
}
