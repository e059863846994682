//! Step state machine for the experiment wizard

use serde::{Deserialize, Serialize};

/// One stage of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Consent,
    Read,
    Chat,
    Quiz,
    Done,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[Step::Consent, Step::Read, Step::Chat, Step::Quiz, Step::Done]
    }

    /// Target of the forward edge, ignoring guards
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Consent => Some(Step::Read),
            Step::Read => Some(Step::Chat),
            Step::Chat => Some(Step::Quiz),
            Step::Quiz => Some(Step::Done),
            Step::Done => None,
        }
    }

    /// Target of the back edge
    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Consent | Step::Done => None,
            Step::Read => Some(Step::Consent),
            Step::Chat => Some(Step::Read),
            Step::Quiz => Some(Step::Chat),
        }
    }

    /// 1-based position for the progress indicator
    pub fn position(&self) -> usize {
        match self {
            Step::Consent => 1,
            Step::Read => 2,
            Step::Chat => 3,
            Step::Quiz => 4,
            Step::Done => 5,
        }
    }
}

/// User-triggered inputs to the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    Forward,
    Back,
    /// Only meaningful on [`Step::Done`]
    Restart,
    /// Only meaningful on [`Step::Consent`]
    SetConsent(bool),
}

/// Current wizard position plus the consent checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowState {
    pub step: Step,
    pub consented: bool,
}

impl Default for FlowState {
    fn default() -> Self {
        Self {
            step: Step::Consent,
            consented: false,
        }
    }
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `action` would change anything from here
    pub fn allows(&self, action: FlowAction) -> bool {
        next_state(*self, action) != *self
    }

    /// Apply `action` in place, returning whether the state changed
    pub fn apply(&mut self, action: FlowAction) -> bool {
        let next = next_state(*self, action);
        let changed = next != *self;
        if changed {
            tracing::debug!(from = ?self.step, to = ?next.step, ?action, "Flow transition");
        }
        *self = next;
        changed
    }
}

/// Pure transition function.
///
/// Moves without an edge from the current step are no-ops, including
/// forward from consent before consent is given. Restart keeps `consented`.
pub fn next_state(current: FlowState, action: FlowAction) -> FlowState {
    match (current.step, action) {
        (Step::Consent, FlowAction::SetConsent(consented)) => FlowState {
            consented,
            ..current
        },
        (Step::Consent, FlowAction::Forward) if !current.consented => current,
        (Step::Done, FlowAction::Restart) => FlowState {
            step: Step::Consent,
            ..current
        },
        (step, FlowAction::Forward) => match step.next() {
            Some(step) => FlowState { step, ..current },
            None => current,
        },
        (step, FlowAction::Back) => match step.previous() {
            Some(step) => FlowState { step, ..current },
            None => current,
        },
        _ => current,
    }
}
