//! # Strains Screen
//!
//! Lists stored strains sorted by name, shows a detail panel for the strain
//! last opened with enter, and hands new strains from the form to the
//! service.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CannabinoidKind, Strain};
use crate::service::StrainService;
use crate::tui::app::Command;
use crate::tui::form::StrainDraft;
use crate::tui::input::NavAction;
use crate::tui::menu::Cursor;
use crate::tui::styles::Styles;

/// Row shown instead of the list when no strain is stored. Display only.
pub const EMPTY_PLACEHOLDER: &str = "No strains available, press alt+n to create a new one.";

/// Outcome of the last strain operation, shown below the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

/// Strains screen state
pub struct StrainsScreen {
    service: StrainService,
    /// Stored strains, sorted by name
    strains: Vec<Strain>,
    cursor: Cursor,
    /// Strain opened in the detail panel
    preview: Option<Strain>,
    status: Option<Status>,
}

impl StrainsScreen {
    /// Create the screen and load the current strains.
    pub fn new(service: StrainService) -> Self {
        let mut screen = Self {
            service,
            strains: Vec::new(),
            cursor: Cursor::default(),
            preview: None,
            status: None,
        };
        screen.refresh();
        screen
    }

    /// Re-query the service.
    pub fn refresh(&mut self) {
        let mut strains = self.service.get_strains();
        strains.sort_by(|a, b| a.name.cmp(&b.name));
        self.strains = strains;
        self.cursor.select(self.cursor.index(), self.strains.len());
    }

    pub fn strains(&self) -> &[Strain] {
        &self.strains
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn preview(&self) -> Option<&Strain> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Rows as (title, description) pairs, or the placeholder row when empty.
    pub fn rows(&self) -> Vec<(String, String)> {
        if self.strains.is_empty() {
            return vec![(EMPTY_PLACEHOLDER.to_string(), String::new())];
        }
        self.strains
            .iter()
            .map(|strain| (strain.name.clone(), strain.list_description()))
            .collect()
    }

    pub fn handle(&mut self, action: NavAction) -> Command {
        let len = self.strains.len();
        match action {
            NavAction::Up => self.cursor.up(len),
            NavAction::Down => self.cursor.down(len),
            NavAction::Confirm => self.open_selected(),
            NavAction::AddNew => return Command::OpenStrainForm,
            _ => {}
        }
        Command::None
    }

    /// Take the result of the strain form.
    ///
    /// A cancelled or invalid form leaves the screen as it was.
    pub fn submit(&mut self, result: Result<StrainDraft, AppError>) {
        let draft = match result {
            Ok(draft) => draft,
            Err(AppError::FormCancelled) => {
                tracing::debug!("Strain form cancelled");
                return;
            }
            Err(AppError::FormInvalid(reason)) => {
                tracing::info!("Strain form rejected: {}", reason);
                return;
            }
            Err(err) => {
                tracing::error!("Strain form failed: {}", err);
                self.status = Some(Status::Error(err.display_line()));
                return;
            }
        };

        let strain = draft.into_strain(Uuid::new_v4(), Utc::now());
        let name = strain.name.clone();
        match self.service.add_strain(strain) {
            Ok(()) => {
                tracing::info!("Added strain {:?}", name);
                self.refresh();
                if let Some(index) = self.strains.iter().position(|s| s.name == name) {
                    self.cursor.select(index, self.strains.len());
                }
                self.status = Some(Status::Success(format!("Added strain {:?}", name)));
            }
            Err(err) => {
                tracing::warn!("Adding strain {:?} failed: {}", name, err);
                self.status = Some(Status::Error(err.display_line()));
            }
        }
    }

    fn open_selected(&mut self) {
        let Some(name) = self
            .strains
            .get(self.cursor.index())
            .map(|strain| strain.name.clone())
        else {
            return;
        };

        match self.service.find_strain_by_name(&name) {
            Ok(strain) => self.preview = Some(strain),
            Err(err) => {
                tracing::warn!("Opening strain {:?} failed: {}", name, err);
                self.preview = None;
                self.status = Some(Status::Error(err.display_line()));
            }
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let [main, actions, status] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(main);

        self.render_list(f, list_area, styles);
        self.render_detail(f, detail_area, styles);
        self.render_actions(f, actions, styles);

        if let Some(line) = self.status() {
            let (text, style) = match line {
                Status::Success(text) => (text.as_str(), styles.text_success()),
                Status::Error(text) => (text.as_str(), styles.text_error()),
            };
            f.render_widget(Paragraph::new(Span::styled(text, style)), status);
        }
    }

    fn render_list(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let items: Vec<ListItem> = self
            .rows()
            .into_iter()
            .map(|(title, description)| {
                let mut lines = vec![Line::from(Span::styled(title, styles.text()))];
                if !description.is_empty() {
                    lines.push(Line::from(Span::styled(description, styles.text_muted())));
                }
                ListItem::new(lines)
            })
            .collect();

        let block = Block::default()
            .title(format!(" {} stored ", self.strains().len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border());

        let mut state = ListState::default();
        if !self.strains().is_empty() {
            state.select(Some(self.cursor()));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(styles.text_highlight())
            .highlight_symbol("➡ ");
        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_detail(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border());

        let Some(strain) = self.preview() else {
            let hint = if self.strains().is_empty() {
                ""
            } else {
                "Press enter to view the selected strain."
            };
            f.render_widget(
                Paragraph::new(Span::styled(hint, styles.text_muted())).block(block),
                area,
            );
            return;
        };

        let mut lines: Vec<Line> = strain
            .to_string()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), styles.text())))
            .collect();

        if !strain.terpenes.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Terpene profile:", styles.text_muted())));
            for kind in &strain.terpenes {
                let terpene = kind.info();
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {} {}°C: ", terpene.name, terpene.boiling_point),
                        styles.text(),
                    ),
                    Span::styled(terpene.flavors.join(", "), styles.text()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", terpene.effects.join(", ")),
                    styles.text_muted(),
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Vaporize at:", styles.text_muted())));
        for kind in [CannabinoidKind::Delta9Thc, CannabinoidKind::Cbd] {
            let cannabinoid = kind.info();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} {}°C ", cannabinoid.short_name, cannabinoid.boiling_point),
                    styles.text(),
                ),
                Span::styled(format!("({})", cannabinoid.notes), styles.text_muted()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}: {}", cannabinoid.name, cannabinoid.effects.join(", ")),
                styles.text_muted(),
            )));
        }

        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_actions(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let unwired = styles.text_muted().add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled("➕ Add Strain (alt+n)", styles.text()),
            Span::styled("  |  ", styles.text_muted()),
            Span::styled("📋 View Strain (enter)", styles.text()),
            Span::styled("  |  ", styles.text_muted()),
            Span::styled("✏ Edit Strain", unwired),
            Span::styled("  |  ", styles.text_muted()),
            Span::styled("❌ Delete Strain", unwired),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
