//! Actions that can be triggered by keys
//!
//! Each action is a single user gesture; [`AppState`](super::AppState)
//! decides what it means for the current step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Quit the application
    Quit,
    /// Press the step's primary button
    Next,
    /// Press the step's back button
    Back,
    /// Toggle the consent checkbox or pick the highlighted quiz answer
    Toggle,
    /// Start over from the done step
    Restart,
    /// Move the quiz highlight down
    SelectNext,
    /// Move the quiz highlight up
    SelectPrev,
}

impl Action {
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Next => "Next",
            Action::Back => "Back",
            Action::Toggle => "Toggle",
            Action::Restart => "Start over",
            Action::SelectNext => "Next answer",
            Action::SelectPrev => "Previous answer",
        }
    }

    /// Default key map
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => Some(Action::Next),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
            KeyCode::Char(' ') | KeyCode::Char('x') => Some(Action::Toggle),
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
            _ => None,
        }
    }
}
