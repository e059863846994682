//! Data persistence layer for studyflow
//!
//! The participant session lives in a small SQLite key-value table. The
//! [`KeyValueStore`] trait lets the bootstrapper run against memory instead.

mod app_state;
mod database;
mod migrations;
mod store;

use std::path::PathBuf;
use std::sync::Arc;

pub use app_state::AppStateStore;
pub use database::{Database, StorageError};
pub use store::{KeyValueStore, MemoryStore, UnavailableStore};

use crate::config::StorageBackend;

/// Open the configured store.
///
/// If the database cannot be opened the participant gets an
/// [`UnavailableStore`]; the bootstrapper then hands out a session that is
/// not saved.
pub fn open_store(backend: StorageBackend, path: PathBuf) -> Arc<dyn KeyValueStore> {
    match backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::Sqlite => match Database::open(path) {
            Ok(db) => Arc::new(AppStateStore::new(db.connection())),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open participant database");
                Arc::new(UnavailableStore::new(e.to_string()))
            }
        },
    }
}
