/// Side effects that should be executed outside the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Restore or create the participant session from storage
    ResolveSession,
}
