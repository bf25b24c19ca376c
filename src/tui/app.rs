//! # TUI Application State
//!
//! The navigation state machine. Key events move between the main menu and
//! the appliance screens; anything that needs the terminal itself (the modal
//! strain form, quitting) is returned to the event loop as a [`Command`].

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::form::StrainDraft;
use super::input::NavAction;
use super::menu::{breadcrumb_title, MainMenu, MenuItem, APP_TITLE};
use super::screens::{Appliance, ApplianceScreen, StrainsScreen};
use super::styles::Styles;
use crate::errors::AppError;
use crate::service::StrainService;

/// What the event loop has to do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    /// Run the modal strain form and pass its result to
    /// [`App::submit_strain_form`].
    OpenStrainForm,
}

/// Identity of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    MainMenu,
    Strains,
    Devices,
    Settings,
    Statistics,
}

/// The active screen and its local state.
pub enum Screen {
    MainMenu(MainMenu),
    Strains(StrainsScreen),
    Appliance(ApplianceScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::MainMenu(_) => ScreenKind::MainMenu,
            Screen::Strains(_) => ScreenKind::Strains,
            Screen::Appliance(screen) => match screen.appliance() {
                Appliance::Devices => ScreenKind::Devices,
                Appliance::Settings => ScreenKind::Settings,
                Appliance::Statistics => ScreenKind::Statistics,
            },
        }
    }

    /// Menu entry the screen was opened from, `None` on the main menu.
    fn menu_item(&self) -> Option<MenuItem> {
        match self {
            Screen::MainMenu(_) => None,
            Screen::Strains(_) => Some(MenuItem::Strains),
            Screen::Appliance(screen) => Some(screen.appliance().menu_item()),
        }
    }
}

/// Main TUI application
pub struct App {
    screen: Screen,
    service: StrainService,
    styles: Styles,
}

impl App {
    /// Create the application on the main menu.
    pub fn new(service: StrainService) -> Self {
        Self {
            screen: Screen::MainMenu(MainMenu::new()),
            service,
            styles: Styles::default(),
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Handle one key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> Command {
        match NavAction::from_key(key) {
            Some(action) => self.handle_action(action),
            None => Command::None,
        }
    }

    /// Apply a navigation action to the current screen.
    pub fn handle_action(&mut self, action: NavAction) -> Command {
        match action {
            NavAction::Quit => {
                tracing::info!("Quit requested from {:?}", self.screen_kind());
                return Command::Quit;
            }
            NavAction::Back => {
                self.screen = Screen::MainMenu(MainMenu::new());
                return Command::None;
            }
            _ => {}
        }

        let target = match &mut self.screen {
            Screen::MainMenu(menu) => match action {
                NavAction::Up => {
                    menu.up();
                    None
                }
                NavAction::Down => {
                    menu.down();
                    None
                }
                NavAction::Confirm => Some(menu.selected()),
                NavAction::Shortcut(c) => MenuItem::from_shortcut(c),
                _ => None,
            },
            Screen::Strains(screen) => return screen.handle(action),
            Screen::Appliance(screen) => {
                screen.handle(action);
                None
            }
        };

        if let Some(item) = target {
            self.open(item);
        }
        Command::None
    }

    /// Hand the result of the modal strain form to the Strains screen.
    pub fn submit_strain_form(&mut self, result: Result<StrainDraft, AppError>) {
        let kind = self.screen_kind();
        match &mut self.screen {
            Screen::Strains(screen) => screen.submit(result),
            _ => tracing::warn!("Strain form result arrived on {:?}, dropping it", kind),
        }
    }

    fn open(&mut self, item: MenuItem) {
        tracing::debug!("Opening {:?}", item);
        self.screen = match item {
            MenuItem::Strains => Screen::Strains(StrainsScreen::new(self.service.clone())),
            MenuItem::Devices => Screen::Appliance(ApplianceScreen::new(Appliance::Devices)),
            MenuItem::Settings => Screen::Appliance(ApplianceScreen::new(Appliance::Settings)),
            MenuItem::Statistics => {
                Screen::Appliance(ApplianceScreen::new(Appliance::Statistics))
            }
        };
    }

    /// Breadcrumb title of the current screen.
    pub fn title(&self) -> String {
        match self.screen.menu_item() {
            Some(item) => breadcrumb_title(&[APP_TITLE, &item.title()]),
            None => breadcrumb_title(&[APP_TITLE]),
        }
    }

    /// Render the whole frame.
    pub fn render(&self, f: &mut Frame<'_>) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .areas(f.area());

        f.render_widget(
            Paragraph::new(Span::styled(self.title(), self.styles.header())),
            header,
        );

        match &self.screen {
            Screen::MainMenu(menu) => menu.render(f, body, &self.styles),
            Screen::Strains(screen) => screen.render(f, body, &self.styles),
            Screen::Appliance(screen) => screen.render(f, body, &self.styles),
        }

        self.render_footer(f, footer);
    }

    fn render_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Press ctrl+c or q to quit.",
            self.styles.text_muted(),
        ))];
        if self.screen_kind() != ScreenKind::MainMenu {
            lines.push(Line::from(Span::styled(
                "Press esc to return to main menu.",
                self.styles.text_muted(),
            )));
        }
        f.render_widget(Paragraph::new(lines), area);
    }
}
