//! # TUI Theming and Styles
//!
//! Centralized color palette and styling for the Wits screens.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the Wits TUI
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    /// Brand color (titles, borders, the cursor)
    pub primary: Color,
    /// Success/positive state
    pub success: Color,
    /// Error/danger state
    pub error: Color,
    /// Selected entries
    pub highlight: Color,
    /// Primary text color
    pub text_primary: Color,
    /// Help and hint text
    pub text_secondary: Color,
    /// Border color
    pub border: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Dark theme palette (default)
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(0x75, 0x71, 0xF9),
            success: Color::Rgb(0x02, 0xBF, 0x87),
            error: Color::Rgb(0xFE, 0x5F, 0x86),
            highlight: Color::Indexed(212),
            text_primary: Color::Reset,
            text_secondary: Color::Indexed(240),
            border: Color::Rgb(0x75, 0x71, 0xF9),
        }
    }
}

/// Reusable style definitions
#[derive(Debug, Clone, Default)]
pub struct Styles {
    pub palette: ColorPalette,
}

impl Styles {
    /// Style for the breadcrumb header
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    /// Style for help and hint text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    /// Style for the entry under the cursor
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.palette.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    pub fn text_error(&self) -> Style {
        Style::default().fg(self.palette.error)
    }

    /// Keyboard mnemonic inside a label
    pub fn mnemonic(&self, base: Style) -> Style {
        base.add_modifier(Modifier::UNDERLINED)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    /// Style for the focused form field border
    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
