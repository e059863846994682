pub mod cli;
pub mod config;
pub mod data;
pub mod flow;
pub mod session;
pub mod ui;
pub mod util;

pub use config::{Config, StorageBackend};
pub use data::{
    open_store, AppStateStore, Database, KeyValueStore, MemoryStore, StorageError,
    UnavailableStore,
};
pub use flow::{next_state, FlowAction, FlowState, Step};
pub use session::{
    Group, ParticipantSession, ResolvedSession, SessionBootstrapper, SessionOrigin,
};
pub use ui::App;
