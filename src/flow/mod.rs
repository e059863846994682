//! Linear consent → read → chat → quiz → done flow

pub mod content;
mod state;

pub use state::{next_state, FlowAction, FlowState, Step};
