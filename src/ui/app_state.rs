//! UI state and the reducer that maps key actions onto the flow

use crate::flow::content::QUIZ_OPTIONS;
use crate::flow::{FlowAction, FlowState, Step};
use crate::session::ResolvedSession;
use crate::ui::action::Action;
use crate::ui::components::{KeyHint, Spinner};

/// Highlight and chosen answer for the placeholder quiz question. Never scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizState {
    pub cursor: usize,
    pub selected: Option<usize>,
}

#[derive(Debug, Default)]
pub struct AppState {
    /// `None` until the bootstrap effect reports back
    pub session: Option<ResolvedSession>,
    pub flow: FlowState,
    pub quiz: QuizState,
    pub spinner: Spinner,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_none()
    }

    pub fn set_session(&mut self, resolved: ResolvedSession) {
        self.session = Some(resolved);
    }

    /// Apply a key action; returns whether anything changed
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                true
            }
            // Participant-scoped content is not shown until the session resolves
            _ if self.is_loading() => false,
            Action::Next if self.flow.step == Step::Done => self.apply_flow(FlowAction::Restart),
            Action::Next => self.apply_flow(FlowAction::Forward),
            Action::Back => self.apply_flow(FlowAction::Back),
            Action::Restart => self.apply_flow(FlowAction::Restart),
            Action::Toggle => match self.flow.step {
                Step::Consent => self.apply_flow(FlowAction::SetConsent(!self.flow.consented)),
                Step::Quiz => {
                    let changed = self.quiz.selected != Some(self.quiz.cursor);
                    self.quiz.selected = Some(self.quiz.cursor);
                    changed
                }
                _ => false,
            },
            Action::SelectNext | Action::SelectPrev if self.flow.step == Step::Quiz => {
                let last = QUIZ_OPTIONS.len().saturating_sub(1);
                let before = self.quiz.cursor;
                self.quiz.cursor = if action == Action::SelectNext {
                    (before + 1).min(last)
                } else {
                    before.saturating_sub(1)
                };
                before != self.quiz.cursor
            }
            Action::SelectNext | Action::SelectPrev => false,
        }
    }

    fn apply_flow(&mut self, action: FlowAction) -> bool {
        let changed = self.flow.apply(action);
        if changed && action == FlowAction::Restart {
            self.quiz = QuizState::default();
        }
        changed
    }

    /// Footer hints for the current step
    pub fn key_hints(&self) -> Vec<KeyHint> {
        let quit = KeyHint::new("q", Action::Quit.description());
        if self.is_loading() {
            return vec![quit];
        }

        let mut hints = Vec::new();
        match self.flow.step {
            Step::Consent => {
                hints.push(KeyHint::new("space", "Consent"));
                hints.push(
                    KeyHint::new("enter", Action::Next.description())
                        .enabled(self.flow.allows(FlowAction::Forward)),
                );
            }
            Step::Read | Step::Chat => {
                hints.push(KeyHint::new("←", Action::Back.description()));
                hints.push(KeyHint::new("enter", Action::Next.description()));
            }
            Step::Quiz => {
                hints.push(KeyHint::new("↑↓", "Choose"));
                hints.push(KeyHint::new("space", "Select"));
                hints.push(KeyHint::new("←", Action::Back.description()));
                hints.push(KeyHint::new("enter", "Finish"));
            }
            Step::Done => hints.push(KeyHint::new("enter", Action::Restart.description())),
        }
        hints.push(quit);
        hints
    }
}
