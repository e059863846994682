//! Session persistence across runs and its interaction with the wizard

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use studyflow::ui::{AppEvent, AppState, Action};
use studyflow::{App, Group, SessionOrigin, Step};

use super::common::fixtures::{started_app, stored_session, TempStudy};

fn press(app: &mut App, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    app.handle_app_event(AppEvent::Input(Event::Key(key)));
}

#[test]
fn test_session_survives_reopen() {
    let study = TempStudy::new();

    let first = study.bootstrapper().resolve();
    assert_eq!(first.origin, SessionOrigin::Created);

    // A new process opens its own connection to the same file
    let second = study.bootstrapper().resolve();
    assert_eq!(second.origin, SessionOrigin::Restored);
    assert_eq!(first.session, second.session);
}

#[test]
fn test_reload_restarts_flow_but_keeps_session() {
    let study = TempStudy::new();

    let mut app = started_app(study.store());
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().flow.step, Step::Read);
    let session = app.state().session.clone().unwrap().session;

    let reloaded = started_app(study.store());
    assert_eq!(reloaded.state().flow.step, Step::Consent);
    assert!(!reloaded.state().flow.consented);
    assert_eq!(reloaded.state().session.clone().unwrap().session, session);
}

#[test]
fn test_full_traversal_and_restart_keep_session() {
    let mut app = started_app(stored_session(Group::Control, "participant-a"));
    let before = app.state().session.clone().unwrap();
    assert_eq!(before.origin, SessionOrigin::Restored);

    let mut visited = vec![app.state().flow.step];
    press(&mut app, KeyCode::Char(' '));
    for _ in 0..4 {
        press(&mut app, KeyCode::Enter);
        visited.push(app.state().flow.step);
    }
    assert_eq!(visited, Step::all());

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().flow.step, Step::Consent);
    assert!(app.state().flow.consented);
    assert_eq!(app.state().session.clone().unwrap(), before);
}

#[test]
fn test_unconsented_forward_is_ignored() {
    let mut app = started_app(stored_session(Group::Intervention, "participant-b"));

    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.state().flow.step, Step::Consent);
}

#[test]
fn test_nothing_moves_before_session_resolves() {
    let mut state = AppState::new();
    assert!(!state.handle_action(Action::Toggle));
    assert!(!state.handle_action(Action::Next));
    assert_eq!(state.flow.step, Step::Consent);
}
