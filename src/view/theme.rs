//! Light/dark theme state, owned by the caller and passed to renderers.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    /// Start from the configured preference.
    pub fn init(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Colour for body text.
    pub fn text(&self) -> Color {
        if self.dark {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Colour for secondary text and the neutral indicator.
    pub fn muted(&self) -> Color {
        if self.dark {
            Color::DarkGrey
        } else {
            Color::Grey
        }
    }
}
