//! Main menu state, the shared wrapping cursor and label helpers.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::styles::Styles;

/// Root node of every breadcrumb title.
pub const APP_TITLE: &str = "🥦 Wits";

/// Selection cursor over a list that wraps at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            len - 1
        } else {
            self.index - 1
        };
    }

    pub fn down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Move to `index`, clamped into a list of `len` items.
    pub fn select(&mut self, index: usize, len: usize) {
        self.index = index.min(len.saturating_sub(1));
    }
}

/// Split a label at its `&` marker into the text before the mnemonic, the
/// mnemonic itself and the text after it.
pub fn split_marked(label: &str) -> (&str, Option<&str>, &str) {
    if let Some(idx) = label.find('&') {
        let rest = &label[idx + 1..];
        if let Some(c) = rest.chars().next() {
            let end = c.len_utf8();
            return (&label[..idx], Some(&rest[..end]), &rest[end..]);
        }
    }
    (label, None, "")
}

/// Label text with the `&` marker removed.
pub fn plain_label(label: &str) -> String {
    let (before, mnemonic, after) = split_marked(label);
    format!("{}{}{}", before, mnemonic.unwrap_or(""), after)
}

/// Lowercased mnemonic character of a marked label.
pub fn mnemonic_of(label: &str) -> Option<char> {
    split_marked(label)
        .1
        .and_then(|m| m.chars().next())
        .map(|c| c.to_ascii_lowercase())
}

/// Join title nodes with ` > `.
pub fn breadcrumb_title(nodes: &[&str]) -> String {
    nodes.join(" > ")
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Strains,
    Devices,
    Settings,
    Statistics,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Strains,
        MenuItem::Devices,
        MenuItem::Settings,
        MenuItem::Statistics,
    ];

    /// Label with its mnemonic marked by `&`.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Strains => "🌿 &Strains",
            MenuItem::Devices => "🚀 &Devices",
            MenuItem::Settings => "🔧 S&ettings",
            MenuItem::Statistics => "📊 St&atistics",
        }
    }

    /// Screen title used in breadcrumbs.
    pub fn title(self) -> String {
        plain_label(self.label())
    }

    /// Digit key, `1` for the first entry.
    pub fn digit(self) -> char {
        match self {
            MenuItem::Strains => '1',
            MenuItem::Devices => '2',
            MenuItem::Settings => '3',
            MenuItem::Statistics => '4',
        }
    }

    /// Resolve a digit or mnemonic key.
    pub fn from_shortcut(c: char) -> Option<MenuItem> {
        let c = c.to_ascii_lowercase();
        MenuItem::ALL
            .into_iter()
            .find(|item| item.digit() == c || mnemonic_of(item.label()) == Some(c))
    }
}

/// The main menu: a fixed item list and a wrapping cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainMenu {
    cursor: Cursor,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn items(&self) -> &'static [MenuItem] {
        &MenuItem::ALL
    }

    pub fn up(&mut self) {
        self.cursor.up(MenuItem::ALL.len());
    }

    pub fn down(&mut self) {
        self.cursor.down(MenuItem::ALL.len());
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.cursor.index() % MenuItem::ALL.len()]
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let mut lines = vec![
            Line::from(Span::styled("Welcome to Wits!", styles.text())),
            Line::from(Span::styled(
                "What would you like to do today?",
                styles.text_muted(),
            )),
            Line::from(""),
        ];

        for (i, item) in self.items().iter().enumerate() {
            let (marker, style) = if i == self.cursor() {
                ("➡ ", styles.text_highlight())
            } else {
                ("  ", styles.text())
            };
            let mut spans = vec![
                Span::styled(marker, style),
                Span::styled(format!("({}) ", item.digit()), styles.text_muted()),
            ];
            spans.extend(marked_spans(item.label(), style, styles));
            lines.push(Line::from(spans));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border());
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Spans for a marked label with the mnemonic underlined.
pub fn marked_spans(label: &'static str, base: Style, styles: &Styles) -> Vec<Span<'static>> {
    let (before, mnemonic, after) = split_marked(label);
    let mut spans = vec![Span::styled(before, base)];
    if let Some(mnemonic) = mnemonic {
        spans.push(Span::styled(mnemonic, styles.mnemonic(base)));
        spans.push(Span::styled(after, base));
    }
    spans
}
