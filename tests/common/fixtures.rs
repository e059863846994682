//! Session and app fixtures

use std::sync::Arc;

use tempfile::TempDir;

use studyflow::session::{GROUP_KEY, PARTICIPANT_ID_KEY};
use studyflow::ui::{AppState, Effect};
use studyflow::{
    open_store, App, Config, Group, KeyValueStore, MemoryStore, ParticipantSession,
    ResolvedSession, SessionBootstrapper, SessionOrigin, StorageBackend,
};

/// A temporary data directory with an on-disk participant database
pub struct TempStudy {
    pub dir: TempDir,
}

impl TempStudy {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Open a fresh connection to the database, as a new process would
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        open_store(
            StorageBackend::Sqlite,
            self.dir.path().join("studyflow.db"),
        )
    }

    pub fn bootstrapper(&self) -> SessionBootstrapper {
        SessionBootstrapper::new(self.store())
    }
}

/// Memory store already holding a complete session
pub fn stored_session(group: Group, participant_id: &str) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_entries([
        (GROUP_KEY, group.as_str()),
        (PARTICIPANT_ID_KEY, participant_id),
    ]))
}

/// App state with a resolved session and the flow at its start
pub fn ready_state(group: Group) -> AppState {
    let mut state = AppState::new();
    state.set_session(ResolvedSession {
        session: ParticipantSession::new("fixture-participant", group),
        origin: SessionOrigin::Restored,
    });
    state
}

/// App whose bootstrap effect has already run
pub fn started_app(store: Arc<dyn KeyValueStore>) -> App {
    let mut app = App::new(Config::default(), SessionBootstrapper::new(store));
    app.run_effect(Effect::ResolveSession);
    app.process_pending();
    app
}
