//! End-to-end tests driving the navigation state machine with key events
//! against both store variants.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use crate::config::{Config, StorageMode};
use crate::errors::{codes, AppError};
use crate::models::Genetic;
use crate::service::StrainService;
use crate::store::{open_store, InMemoryStrainStore, StrainStore, YamlFileStrainStore};
use crate::tui::form::test_support::fill_form;
use crate::tui::form::StrainForm;
use crate::tui::screens::{Status, StrainsScreen, EMPTY_PLACEHOLDER};
use crate::tui::app::{App, Command, Screen, ScreenKind};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn alt_n() -> KeyEvent {
    KeyEvent::new(KeyCode::Char('n'), KeyModifiers::ALT)
}

fn in_memory_service() -> StrainService {
    StrainService::new(Arc::new(InMemoryStrainStore::new()))
}

fn strains_screen(app: &App) -> &StrainsScreen {
    match app.screen() {
        Screen::Strains(screen) => screen,
        _ => panic!("not on the Strains screen"),
    }
}

/// Walk the add-strain flow the way the event loop does.
fn add_strain_via_form(app: &mut App, name: &str, thc: &str) {
    assert_eq!(app.handle_key(alt_n()), Command::OpenStrainForm);
    let mut form = StrainForm::new();
    fill_form(&mut form, name, 2, thc);
    let result = form
        .handle_key(key(KeyCode::Enter))
        .expect("enter on the last field submits");
    app.submit_strain_form(result);
}

#[test]
fn test_barongo_scenario_in_memory() {
    let service = in_memory_service();
    let mut app = App::new(service.clone());

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.screen_kind(), ScreenKind::Strains);

    add_strain_via_form(&mut app, "Barongo 27/1 MAC3", "27");

    let found = service.find_strain_by_name("Barongo 27/1 MAC3").unwrap();
    assert_eq!(found.genetic, Genetic::Hybrid);
    assert_eq!(found.thc, 27.0);
    assert_eq!(found.cbd, 1.0);
    assert_eq!(found.amount, 5.0);
    assert_eq!(found.created_at, found.updated_at);

    let screen = strains_screen(&app);
    assert_eq!(screen.strains().len(), 1);
    assert!(matches!(screen.status(), Some(Status::Success(_))));

    // Second add with the same name is rejected and shown.
    add_strain_via_form(&mut app, "Barongo 27/1 MAC3", "20");
    let screen = strains_screen(&app);
    assert_eq!(service.get_strains().len(), 1);
    assert_eq!(screen.strains().len(), 1);
    match screen.status() {
        Some(Status::Error(text)) => assert!(text.starts_with(codes::ALREADY_EXISTS)),
        other => panic!("unexpected status {:?}", other),
    }
    assert_eq!(
        service.find_strain_by_name("Barongo 27/1 MAC3").unwrap().thc,
        27.0
    );
}

#[test]
fn test_cancelled_form_adds_nothing() {
    let service = in_memory_service();
    let mut app = App::new(service.clone());
    app.handle_key(key(KeyCode::Char('s')));

    assert_eq!(app.handle_key(alt_n()), Command::OpenStrainForm);
    let mut form = StrainForm::new();
    let result = form.handle_key(key(KeyCode::Esc)).unwrap();
    assert_eq!(result, Err(AppError::FormCancelled));
    app.submit_strain_form(result);

    assert!(service.get_strains().is_empty());
    assert_eq!(strains_screen(&app).rows()[0].0, EMPTY_PLACEHOLDER);
    assert!(strains_screen(&app).status().is_none());
}

#[test]
fn test_placeholder_is_never_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strains.yml");
    let store = Arc::new(YamlFileStrainStore::open(&path).unwrap());
    let mut app = App::new(StrainService::new(store.clone()));

    app.handle_key(key(KeyCode::Char('1')));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Esc));

    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_file_store_round_trip_through_app() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        storage_mode: StorageMode::YmlFile,
        wits_dir: dir.path().to_path_buf(),
        log_dir: "logs".into(),
        log_file: "wits.log".to_string(),
        log_level: "info".to_string(),
    };

    let mut app = App::new(StrainService::new(open_store(&config).unwrap()));
    app.handle_key(key(KeyCode::Char('s')));
    add_strain_via_form(&mut app, "Zkittlez", "22");
    add_strain_via_form(&mut app, "Amnesia Haze", "21");
    app.handle_key(key(KeyCode::Char('q')));

    // A fresh process sees both strains, sorted on screen.
    let mut app = App::new(StrainService::new(open_store(&config).unwrap()));
    app.handle_key(key(KeyCode::Char('s')));
    let names: Vec<&str> = strains_screen(&app)
        .strains()
        .iter()
        .map(|strain| strain.name.as_str())
        .collect();
    assert_eq!(names, vec!["Amnesia Haze", "Zkittlez"]);

    // Enter opens the selected record through the service.
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        strains_screen(&app).preview().map(|s| s.name.as_str()),
        Some("Zkittlez")
    );
}

#[test]
fn test_screen_state_is_discarded_on_escape() {
    let mut app = App::new(in_memory_service());
    app.handle_key(key(KeyCode::Char('s')));
    add_strain_via_form(&mut app, "Amnesia Haze", "21");
    add_strain_via_form(&mut app, "Zkittlez", "22");
    app.handle_key(key(KeyCode::Up));

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.screen_kind(), ScreenKind::MainMenu);

    app.handle_key(key(KeyCode::Char('s')));
    let screen = strains_screen(&app);
    assert_eq!(screen.cursor(), 0);
    assert!(screen.status().is_none());
    assert_eq!(screen.strains().len(), 2);
}

#[test]
fn test_quit_from_every_screen() {
    for shortcut in ['1', '2', '3', '4'] {
        let mut app = App::new(in_memory_service());
        app.handle_key(key(KeyCode::Char(shortcut)));
        assert_ne!(app.screen_kind(), ScreenKind::MainMenu);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Command::Quit);
    }
}
