//! Rendering checks against Ratatui's TestBackend

use studyflow::flow::content::{CHAT_CONTROL, CONSENT_LABEL, LOADING_TEXT};
use studyflow::ui::{Action, AppState};
use studyflow::{Config, FlowState, Group, Step};

use super::common::fixtures::{ready_state, started_app, TempStudy};
use super::common::terminal::{assert_screen_contains, assert_screen_lacks, render_screen};

fn at(group: Group, step: Step) -> AppState {
    let mut state = ready_state(group);
    state.flow = FlowState {
        step,
        consented: true,
    };
    state
}

#[test]
fn test_loading_view_before_session() {
    let screen = render_screen(&AppState::new(), &Config::default());

    assert_screen_contains(&screen, LOADING_TEXT);
    assert_screen_lacks(&screen, "Group:");
    assert_screen_lacks(&screen, "Consent");
}

#[test]
fn test_header_shows_group_and_id() {
    let screen = render_screen(&ready_state(Group::Intervention), &Config::default());

    assert_screen_contains(&screen, "Bachelor experiment");
    assert_screen_contains(&screen, "Group: Intervention (test)");
    assert_screen_contains(&screen, "ID: fixture-participant");
    assert_screen_contains(&screen, "Step 1/5");
}

#[test]
fn test_participant_id_can_be_hidden() {
    let config = Config {
        show_participant_id: false,
        ..Config::default()
    };
    let screen = render_screen(&ready_state(Group::Control), &config);

    assert_screen_contains(&screen, "Group: Control");
    assert_screen_lacks(&screen, "fixture-participant");
}

#[test]
fn test_consent_checkbox_reflects_state() {
    let mut state = ready_state(Group::Control);
    let screen = render_screen(&state, &Config::default());
    assert_screen_contains(&screen, &format!("[ ] {CONSENT_LABEL}"));

    state.handle_action(Action::Toggle);
    let screen = render_screen(&state, &Config::default());
    assert_screen_contains(&screen, &format!("[x] {CONSENT_LABEL}"));
}

#[test]
fn test_chat_text_depends_on_group() {
    let control = render_screen(&at(Group::Control, Step::Chat), &Config::default());
    assert_screen_contains(&control, CHAT_CONTROL);
    assert_screen_lacks(&control, "active recall");

    let intervention = render_screen(&at(Group::Intervention, Step::Chat), &Config::default());
    assert_screen_contains(&intervention, "active recall");
    assert_screen_lacks(&intervention, CHAT_CONTROL);
}

#[test]
fn test_quiz_marks_selected_answer() {
    let mut state = at(Group::Control, Step::Quiz);
    state.handle_action(Action::SelectNext);
    state.handle_action(Action::Toggle);

    let screen = render_screen(&state, &Config::default());
    assert_screen_contains(&screen, "Q1: What best describes inflation?");
    assert_screen_contains(&screen, "(•) Prices generally rise over time");
    assert_screen_contains(&screen, "( ) Prices generally fall over time");
}

#[test]
fn test_done_offers_start_over() {
    let screen = render_screen(&at(Group::Control, Step::Done), &Config::default());

    assert_screen_contains(&screen, "Thank you!");
    assert_screen_contains(&screen, "Start over");
    assert_screen_lacks(&screen, "← Back");
}

#[test]
fn test_unsaved_session_is_flagged_in_header() {
    let study = TempStudy::new();
    std::fs::create_dir(study.dir.path().join("studyflow.db")).unwrap();
    let app = started_app(study.store());

    let screen = render_screen(app.state(), &Config::default());
    assert_screen_contains(&screen, "not saved");
    assert_screen_contains(&screen, "Step 1/5");
}
