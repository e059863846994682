//! Placeholder copy for each wizard step

use crate::session::Group;

use super::state::Step;

pub const STUDY_TITLE: &str = "Bachelor experiment";
pub const LOADING_TEXT: &str = "Loading...";

pub const CONSENT_BODY: &str = "You are taking part in a short study about learning with an \
AI assistant. Your answers are stored anonymously. You can stop at any time.";
pub const CONSENT_LABEL: &str = "I consent to participating and to the processing of my data.";

pub const READ_BODY: &str = "Your learning text goes here. Keep it short (e.g. 400-800 words).";
pub const READ_SAMPLE_HEADING: &str = "Sample text:";
pub const READ_SAMPLE: &str = "Inflation describes a general rise in the price level over time. \
When inflation rises, the purchasing power of money falls...";

pub const CHAT_BODY: &str = "The assistant API will be connected here later.";
pub const CHAT_DEMO_HEADING: &str = "Preliminary demo:";
pub const CHAT_CONTROL: &str = "Control: 'You can ask me about the text.'";
pub const CHAT_INTERVENTION: &str = "Intervention: 'Let's use active recall. Tell me in your \
own words: what is inflation, and why does it happen?'";

pub const QUIZ_BODY: &str = "Multiple choice and possibly Likert items will go here later.";
pub const QUIZ_QUESTION: &str = "Q1: What best describes inflation?";
pub const QUIZ_OPTIONS: &[&str] = &[
    "Prices generally fall over time",
    "Prices generally rise over time",
    "Wages always rise faster than prices",
];

pub const DONE_TITLE: &str = "Thank you!";
pub const DONE_BODY: &str = "Done.";

/// Panel heading for a step
pub fn step_title(step: Step) -> &'static str {
    match step {
        Step::Consent => "Consent",
        Step::Read => "Read text (placeholder)",
        Step::Chat => "Chat (placeholder)",
        Step::Quiz => "Quiz (placeholder)",
        Step::Done => DONE_TITLE,
    }
}

/// The chat step's demo line for a group
pub fn chat_message(group: Group) -> &'static str {
    match group {
        Group::Control => CHAT_CONTROL,
        Group::Intervention => CHAT_INTERVENTION,
    }
}

/// Label of the forward button on a step, if it has one
pub fn forward_label(step: Step) -> Option<&'static str> {
    match step {
        Step::Consent => Some("Next"),
        Step::Read => Some("Continue to chat"),
        Step::Chat => Some("Continue to quiz"),
        Step::Quiz => Some("Finish"),
        Step::Done => None,
    }
}
