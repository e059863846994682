use crate::session::ResolvedSession;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// The one-time session bootstrap finished
    SessionResolved(ResolvedSession),

    /// Tick for the loading animation
    Tick,
}
