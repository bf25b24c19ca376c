//! Terminal event loop.
//!
//! Owns the real terminal: raw mode, the alternate screen, blocking reads of
//! key events and the modal strain form.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{App, Command};
use super::form::{StrainDraft, StrainForm};
use super::styles::Styles;
use crate::errors::AppError;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn terminal_error(err: io::Error) -> AppError {
    tracing::error!("Terminal error: {:?}", err);
    AppError::Terminal(format!("Terminal I/O error: {}", err))
}

/// Run the application until the user quits.
pub fn run(app: &mut App) -> Result<(), AppError> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(terminal_error(err));
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(terminal_error(err));
        }
    };

    tracing::info!("Terminal ready, entering event loop");
    let result = event_loop(app, &mut terminal);

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn event_loop(app: &mut App, terminal: &mut Term) -> Result<(), AppError> {
    loop {
        terminal
            .draw(|frame| app.render(frame))
            .map_err(terminal_error)?;

        let Event::Key(key) = event::read().map_err(terminal_error)? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            Command::None => {}
            Command::Quit => return Ok(()),
            Command::OpenStrainForm => {
                let result = run_strain_form(terminal, app.styles());
                app.submit_strain_form(result);
            }
        }
    }
}

/// Run the modal strain form until it is submitted or cancelled.
fn run_strain_form(terminal: &mut Term, styles: &Styles) -> Result<StrainDraft, AppError> {
    let mut form = StrainForm::new();
    loop {
        terminal
            .draw(|frame| form.render(frame, styles))
            .map_err(terminal_error)?;

        if let Event::Key(key) = event::read().map_err(terminal_error)? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(result) = form.handle_key(key) {
                return result;
            }
        }
    }
}
