//! Modal strain form.
//!
//! Field-by-field data entry for a new strain. The form owns only its own
//! input state; submitting yields a typed [`StrainDraft`] which the Strains
//! screen turns into a stored [`Strain`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use uuid::Uuid;

use super::menu::{breadcrumb_title, Cursor, MenuItem, APP_TITLE};
use super::styles::Styles;
use crate::errors::AppError;
use crate::models::{Genetic, Strain, TerpeneKind};

/// Typed result of a submitted strain form.
#[derive(Debug, Clone, PartialEq)]
pub struct StrainDraft {
    pub name: String,
    pub cultivar: String,
    pub manufacturer: String,
    pub country: String,
    pub genetic: Genetic,
    pub radiated: bool,
    pub thc: f64,
    pub cbd: f64,
    pub terpenes: BTreeSet<TerpeneKind>,
    pub amount: f64,
}

impl StrainDraft {
    /// Build the record to store. `created_at` and `updated_at` are both `now`.
    pub fn into_strain(self, id: Uuid, now: DateTime<Utc>) -> Strain {
        Strain {
            id,
            name: self.name,
            cultivar: self.cultivar,
            manufacturer: self.manufacturer,
            country: self.country,
            genetic: self.genetic,
            radiated: self.radiated,
            thc: self.thc,
            cbd: self.cbd,
            terpenes: self.terpenes,
            amount: self.amount,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Cultivar,
    Manufacturer,
    Country,
    Genetic,
    Radiated,
    Thc,
    Cbd,
    Terpenes,
    Amount,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Name,
        FormField::Cultivar,
        FormField::Manufacturer,
        FormField::Country,
        FormField::Genetic,
        FormField::Radiated,
        FormField::Thc,
        FormField::Cbd,
        FormField::Terpenes,
        FormField::Amount,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FormField::Name => "Strain",
            FormField::Cultivar => "Cultivar",
            FormField::Manufacturer => "Manufacturer",
            FormField::Country => "Country",
            FormField::Genetic => "Genetic",
            FormField::Radiated => "Radiated",
            FormField::Thc => "THC (%)",
            FormField::Cbd => "CBD (%)",
            FormField::Terpenes => "Terpenes",
            FormField::Amount => "Amount (g)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FormField::Name => "The product name",
            FormField::Cultivar => "The plant name",
            FormField::Manufacturer => "The producing company",
            FormField::Country => "The country of origin",
            FormField::Genetic => "The phenotype",
            FormField::Radiated => "If the plant was radiation treated",
            FormField::Thc => "The THC content",
            FormField::Cbd => "The CBD content",
            FormField::Terpenes => "The contained terpenes",
            FormField::Amount => "The weight",
        }
    }
}

/// Parse a numeric form value; anything unparseable, non-finite or negative
/// becomes 0.
pub fn parse_number_or_zero(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

/// Input state of the strain form.
#[derive(Debug, Clone)]
pub struct StrainForm {
    focus: usize,
    name: String,
    cultivar: String,
    manufacturer: String,
    country: String,
    genetic: Cursor,
    radiated: bool,
    thc: String,
    cbd: String,
    terpene_options: Vec<TerpeneKind>,
    terpene_cursor: Cursor,
    terpenes: BTreeSet<TerpeneKind>,
    amount: String,
}

impl Default for StrainForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StrainForm {
    pub fn new() -> Self {
        Self {
            focus: 0,
            name: String::new(),
            cultivar: String::new(),
            manufacturer: String::new(),
            country: String::new(),
            genetic: Cursor::default(),
            radiated: false,
            thc: String::new(),
            cbd: String::new(),
            terpene_options: TerpeneKind::sorted_by_name(),
            terpene_cursor: Cursor::default(),
            terpenes: BTreeSet::new(),
            amount: String::new(),
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    /// Current text of a free-text field; empty for select fields.
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Cultivar => &self.cultivar,
            FormField::Manufacturer => &self.manufacturer,
            FormField::Country => &self.country,
            FormField::Thc => &self.thc,
            FormField::Cbd => &self.cbd,
            FormField::Amount => &self.amount,
            FormField::Genetic | FormField::Radiated | FormField::Terpenes => "",
        }
    }

    pub fn genetic(&self) -> Genetic {
        Genetic::ALL[self.genetic.index()]
    }

    pub fn radiated(&self) -> bool {
        self.radiated
    }

    /// Terpene choices in display order.
    pub fn terpene_options(&self) -> &[TerpeneKind] {
        &self.terpene_options
    }

    /// Index of the highlighted terpene choice.
    pub fn terpene_cursor(&self) -> usize {
        self.terpene_cursor.index()
    }

    pub fn is_terpene_selected(&self, kind: TerpeneKind) -> bool {
        self.terpenes.contains(&kind)
    }

    /// Feed one key press. Returns `Some` once the form is finished, either
    /// with a draft or with `FormCancelled`/`FormInvalid`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Result<StrainDraft, AppError>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return Some(Err(AppError::FormCancelled)),
            KeyCode::Char('c') if ctrl => return Some(Err(AppError::FormCancelled)),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            KeyCode::Enter => {
                if self.focus + 1 == FormField::ALL.len() {
                    return Some(self.submit());
                }
                self.next_field();
            }
            KeyCode::Left => self.cycle(false),
            KeyCode::Right => self.cycle(true),
            KeyCode::Char(' ') if self.focused() == FormField::Terpenes => self.toggle_terpene(),
            KeyCode::Char(c) if !ctrl && !alt => {
                if let Some(text) = self.text_mut() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
            }
            _ => {}
        }
        None
    }

    /// Validate the current input into a draft.
    pub fn submit(&self) -> Result<StrainDraft, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::FormInvalid("Strain name is required".to_string()));
        }

        Ok(StrainDraft {
            name: name.to_string(),
            cultivar: self.cultivar.trim().to_string(),
            manufacturer: self.manufacturer.trim().to_string(),
            country: self.country.trim().to_string(),
            genetic: self.genetic(),
            radiated: self.radiated,
            thc: parse_number_or_zero(&self.thc),
            cbd: parse_number_or_zero(&self.cbd),
            terpenes: self.terpenes.clone(),
            amount: parse_number_or_zero(&self.amount),
        })
    }

    pub fn render(&self, f: &mut Frame<'_>, styles: &Styles) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(f.area());

        let title = breadcrumb_title(&[APP_TITLE, &MenuItem::Strains.title(), "➕ Add Strain"]);
        f.render_widget(Paragraph::new(Span::styled(title, styles.header())), header);

        let mut lines = Vec::new();
        for field in FormField::ALL {
            let focused = field == self.focused();
            let (marker, label_style) = if focused {
                ("➡ ", styles.text_highlight())
            } else {
                ("  ", styles.text())
            };

            let value = match field {
                FormField::Genetic => format!("< {} >", self.genetic().as_str()),
                FormField::Radiated => {
                    format!("< {} >", if self.radiated() { "Yes" } else { "No" })
                }
                FormField::Terpenes => self.terpene_value(),
                _ if focused => format!("{}▏", self.text(field)),
                _ => self.text(field).to_string(),
            };

            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<14}", field.title()), label_style),
                Span::styled(value, styles.text()),
            ]));
            if focused {
                lines.push(Line::from(Span::styled(
                    format!("  {:<14}{}", "", field.description()),
                    styles.text_muted(),
                )));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border_focused());
        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            body,
        );

        f.render_widget(
            Paragraph::new(Span::styled(
                "tab/↓ next • shift+tab/↑ back • ←/→ choose • space toggle • enter next/submit • esc cancel",
                styles.text_muted(),
            )),
            footer,
        );
    }

    fn terpene_value(&self) -> String {
        let highlighted = self
            .terpene_options()
            .get(self.terpene_cursor())
            .map(|kind| {
                let mark = if self.is_terpene_selected(*kind) { "x" } else { " " };
                format!("< [{}] {} >", mark, kind.name())
            })
            .unwrap_or_default();
        let chosen: Vec<&str> = self.terpenes.iter().map(|kind| kind.name()).collect();
        if chosen.is_empty() {
            highlighted
        } else {
            format!("{}  {}", highlighted, chosen.join(", "))
        }
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1).min(FormField::ALL.len() - 1);
    }

    fn previous_field(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    fn cycle(&mut self, forward: bool) {
        match self.focused() {
            FormField::Genetic => {
                if forward {
                    self.genetic.down(Genetic::ALL.len());
                } else {
                    self.genetic.up(Genetic::ALL.len());
                }
            }
            FormField::Radiated => self.radiated = !self.radiated,
            FormField::Terpenes => {
                let len = self.terpene_options.len();
                if forward {
                    self.terpene_cursor.down(len);
                } else {
                    self.terpene_cursor.up(len);
                }
            }
            _ => {}
        }
    }

    fn toggle_terpene(&mut self) {
        if let Some(&kind) = self.terpene_options.get(self.terpene_cursor.index()) {
            if !self.terpenes.remove(&kind) {
                self.terpenes.insert(kind);
            }
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Name => Some(&mut self.name),
            FormField::Cultivar => Some(&mut self.cultivar),
            FormField::Manufacturer => Some(&mut self.manufacturer),
            FormField::Country => Some(&mut self.country),
            FormField::Thc => Some(&mut self.thc),
            FormField::Cbd => Some(&mut self.cbd),
            FormField::Amount => Some(&mut self.amount),
            FormField::Genetic | FormField::Radiated | FormField::Terpenes => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_number_or_zero() {
        assert_eq!(parse_number_or_zero("27.5"), 27.5);
        assert_eq!(parse_number_or_zero(" 3 "), 3.0);
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("lots"), 0.0);
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
        assert_eq!(parse_number_or_zero("inf"), 0.0);
        assert_eq!(parse_number_or_zero("-2"), 0.0);
    }

    #[test]
    fn test_filled_form_submits_typed_draft() {
        let mut form = StrainForm::new();
        fill_form(&mut form, "Barongo 27/1 MAC3", 2, "27");
        assert_eq!(form.focused(), FormField::Amount);

        let draft = press(&mut form, KeyCode::Enter).unwrap().unwrap();
        assert_eq!(draft.name, "Barongo 27/1 MAC3");
        assert_eq!(draft.cultivar, "MAC");
        assert_eq!(draft.manufacturer, "Barongo");
        assert_eq!(draft.country, "Germany");
        assert_eq!(draft.genetic, Genetic::Hybrid);
        assert!(!draft.radiated);
        assert_eq!(draft.thc, 27.0);
        assert_eq!(draft.cbd, 1.0);
        assert_eq!(draft.amount, 5.0);
        // Space toggled the first option, which sorts first by name.
        assert_eq!(
            draft.terpenes.into_iter().collect::<Vec<_>>(),
            vec![TerpeneKind::Apigenin]
        );
    }

    #[test]
    fn test_bad_numbers_become_zero() {
        let mut form = StrainForm::new();
        fill_form(&mut form, "Sour Diesel", 0, "a lot");
        let draft = form.submit().unwrap();
        assert_eq!(draft.thc, 0.0);
        assert_eq!(draft.genetic, Genetic::Sativa);
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let mut form = StrainForm::new();
        type_text(&mut form, "   ");
        let err = form.submit().unwrap_err();
        assert_eq!(err.error_code(), crate::errors::codes::FORM_INVALID);
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let mut form = StrainForm::new();
        assert_eq!(
            press(&mut form, KeyCode::Esc),
            Some(Err(AppError::FormCancelled))
        );

        let mut form = StrainForm::new();
        let result = form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(result, Some(Err(AppError::FormCancelled)));
    }

    #[test]
    fn test_enter_advances_until_last_field() {
        let mut form = StrainForm::new();
        type_text(&mut form, "Amnesia");
        for field in FormField::ALL.iter().skip(1) {
            assert!(press(&mut form, KeyCode::Enter).is_none());
            assert_eq!(form.focused(), *field);
        }
        assert!(press(&mut form, KeyCode::Enter).unwrap().is_ok());
    }

    #[test]
    fn test_focus_stays_in_bounds() {
        let mut form = StrainForm::new();
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focused(), FormField::Name);
        for _ in 0..20 {
            press(&mut form, KeyCode::Tab);
        }
        assert_eq!(form.focused(), FormField::Amount);
    }

    #[test]
    fn test_backspace_and_select_fields() {
        let mut form = StrainForm::new();
        type_text(&mut form, "Lemon");
        press(&mut form, KeyCode::Backspace);
        assert_eq!(form.text(FormField::Name), "Lemo");

        for _ in 0..4 {
            press(&mut form, KeyCode::Tab);
        }
        assert_eq!(form.focused(), FormField::Genetic);
        press(&mut form, KeyCode::Left);
        assert_eq!(form.genetic(), Genetic::Hybrid);
        // Typing into a select does nothing.
        type_text(&mut form, "x");
        assert_eq!(form.text(FormField::Genetic), "");

        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Right);
        assert!(form.radiated());
    }

    #[test]
    fn test_space_toggles_highlighted_terpene() {
        let mut form = StrainForm::new();
        for _ in 0..8 {
            press(&mut form, KeyCode::Tab);
        }
        assert_eq!(form.focused(), FormField::Terpenes);

        press(&mut form, KeyCode::Right);
        let kind = form.terpene_options()[form.terpene_cursor()];
        press(&mut form, KeyCode::Char(' '));
        assert!(form.is_terpene_selected(kind));
        press(&mut form, KeyCode::Char(' '));
        assert!(!form.is_terpene_selected(kind));
    }

    #[test]
    fn test_render_shows_fields_and_focus_hint() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut form = StrainForm::new();
        type_text(&mut form, "Amnesia");
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| form.render(f, &Styles::default())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Add Strain"));
        assert!(text.contains("Amnesia"));
        assert!(text.contains("The product name"));
        assert!(text.contains("Amount (g)"));
        assert!(text.contains("< Sativa >"));
    }

    #[test]
    fn test_into_strain_sets_identity_and_timestamps() {
        let mut form = StrainForm::new();
        fill_form(&mut form, "Barongo 27/1 MAC3", 2, "27");
        let draft = form.submit().unwrap();

        let id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let strain = draft.into_strain(id, now);
        assert_eq!(strain.id, id);
        assert_eq!(strain.created_at, now);
        assert_eq!(strain.updated_at, strain.created_at);
        assert_eq!(strain.genetic, Genetic::Hybrid);
    }
}
