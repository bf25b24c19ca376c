//! # Appliance Screens
//!
//! Devices, Settings and Statistics. They list their actions and let the
//! cursor move over them; none of the actions is wired yet.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::input::NavAction;
use crate::tui::menu::{Cursor, MenuItem};
use crate::tui::styles::Styles;

/// The static appliances reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appliance {
    Devices,
    Settings,
    Statistics,
}

impl Appliance {
    pub fn menu_item(self) -> MenuItem {
        match self {
            Appliance::Devices => MenuItem::Devices,
            Appliance::Settings => MenuItem::Settings,
            Appliance::Statistics => MenuItem::Statistics,
        }
    }

    pub fn actions(self) -> &'static [&'static str] {
        match self {
            Appliance::Devices => &[
                "➕ Add Device",
                "📋 View Devices",
                "✏️ Edit Device",
                "❌ Delete Device",
            ],
            Appliance::Settings => &[
                "🎨 Appearance",
                "⌨️ Keybindings",
                "🌍 Localization",
                "💾 Backup & Restore",
            ],
            Appliance::Statistics => &["📅 Usage History", "📈 Trends", "🔢 Dosage Tracker"],
        }
    }
}

/// State of a static appliance screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceScreen {
    appliance: Appliance,
    cursor: Cursor,
}

impl ApplianceScreen {
    pub fn new(appliance: Appliance) -> Self {
        Self {
            appliance,
            cursor: Cursor::default(),
        }
    }

    pub fn appliance(&self) -> Appliance {
        self.appliance
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn handle(&mut self, action: NavAction) {
        let len = self.appliance.actions().len();
        match action {
            NavAction::Up => self.cursor.up(len),
            NavAction::Down => self.cursor.down(len),
            NavAction::Confirm => {
                tracing::debug!(
                    appliance = ?self.appliance,
                    action = self.appliance.actions()[self.cursor.index()],
                    "Action is not available yet"
                );
            }
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let lines: Vec<Line> = self
            .appliance
            .actions()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == self.cursor() {
                    Line::from(vec![
                        Span::styled("➡ ", styles.text_highlight()),
                        Span::styled(*label, styles.text_highlight()),
                    ])
                } else {
                    Line::from(vec![Span::raw("  "), Span::styled(*label, styles.text())])
                }
            })
            .collect();

        let block = Block::default()
            .title(format!(" {} ", self.appliance.menu_item().title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border());

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
