//! Theme model.
//!
//! A theme is a flat record of named colors. The toolkit never parses theme
//! files itself; a [`ThemeProvider`](crate::backend::ThemeProvider)
//! capability turns some external representation into a [`Theme`], and the
//! toolkit applies it to a window by value swap. The only contract the
//! toolkit enforces is "did loading report success" — a failed load never
//! leaves a half-applied theme on a window.

use crate::geometry::Color;

/// The named color roles every widget drawer works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Window background.
    pub base: Color,
    /// Text and outlines.
    pub neutral: Color,
    /// Widget body fill.
    pub widget_base: Color,
    /// Accent for active/selected elements.
    pub primary: Color,
    /// Destructive/error emphasis.
    pub danger: Color,
    /// Informational emphasis.
    pub info: Color,
    /// Positive/confirmation emphasis.
    pub success: Color,
}

impl Default for Theme {
    /// The built-in light palette, used by every window until a theme is
    /// applied.
    fn default() -> Self {
        Self {
            base: Color::from_hex(0xffffff),
            neutral: Color::from_hex(0x2c2f33),
            widget_base: Color::from_hex(0xd3d3d3),
            primary: Color::from_hex(0x2196f3),
            danger: Color::from_hex(0xe91e63),
            info: Color::from_hex(0x2196f3),
            success: Color::from_hex(0x4caf50),
        }
    }
}

impl Theme {
    /// The built-in dark palette.
    pub fn dark() -> Self {
        Self {
            base: Color::from_hex(0x17181a),
            neutral: Color::from_hex(0xe6e6e6),
            widget_base: Color::from_hex(0x24262b),
            primary: Color::from_hex(0x2196f3),
            danger: Color::from_hex(0xe91e63),
            info: Color::from_hex(0x2196f3),
            success: Color::from_hex(0x4caf50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_roles_differ() {
        let theme = Theme::default();
        assert_ne!(theme.base, theme.neutral);
        assert_ne!(theme.widget_base, theme.primary);
    }
}
