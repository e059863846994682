//! Resolve the participant session from local storage

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::data::{KeyValueStore, StorageError};

use super::participant::{Group, ParticipantSession};

/// Storage key for the group tag
pub const GROUP_KEY: &str = "group";
/// Storage key for the participant id
pub const PARTICIPANT_ID_KEY: &str = "participantId";

/// How a session came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    /// Read back from storage unchanged
    Restored,
    /// Freshly generated and written to storage
    Created,
    /// Generated but storage failed; lives only for this run
    Ephemeral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub session: ParticipantSession,
    pub origin: SessionOrigin,
}

/// Restores or creates the participant session.
///
/// Both keys are always written together. A lone key, an empty value or an
/// unknown group tag counts as no session at all.
#[derive(Clone)]
pub struct SessionBootstrapper {
    store: Arc<dyn KeyValueStore>,
}

impl SessionBootstrapper {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Resolve using the thread-local RNG
    pub fn resolve(&self) -> ResolvedSession {
        self.resolve_with(&mut rand::rng())
    }

    /// Resolve using the given RNG for group assignment.
    ///
    /// Never fails: storage errors degrade to an ephemeral session.
    pub fn resolve_with<R: Rng + ?Sized>(&self, rng: &mut R) -> ResolvedSession {
        match self.restore() {
            Ok(Some(session)) => {
                tracing::info!(
                    participant_id = %session.participant_id,
                    group = %session.group,
                    "Restored participant session"
                );
                ResolvedSession {
                    session,
                    origin: SessionOrigin::Restored,
                }
            }
            Ok(None) => {
                let session = ParticipantSession::generate(rng);
                match self.persist(&session) {
                    Ok(()) => {
                        tracing::info!(
                            participant_id = %session.participant_id,
                            group = %session.group,
                            "Created participant session"
                        );
                        ResolvedSession {
                            session,
                            origin: SessionOrigin::Created,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to persist participant session, keeping it in memory");
                        ResolvedSession {
                            session,
                            origin: SessionOrigin::Ephemeral,
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Storage unavailable, using in-memory participant session");
                ResolvedSession {
                    session: ParticipantSession::generate(rng),
                    origin: SessionOrigin::Ephemeral,
                }
            }
        }
    }

    /// Read the stored session, if a complete and valid one exists
    pub fn restore(&self) -> Result<Option<ParticipantSession>, StorageError> {
        let group = self.store.get(GROUP_KEY)?.filter(|v| !v.is_empty());
        let participant_id = self.store.get(PARTICIPANT_ID_KEY)?.filter(|v| !v.is_empty());

        match (group, participant_id) {
            (Some(group), Some(participant_id)) => match group.parse::<Group>() {
                Ok(group) => Ok(Some(ParticipantSession {
                    participant_id,
                    group,
                })),
                Err(e) => {
                    tracing::debug!(error = %e, "Discarding stored session with invalid group");
                    Ok(None)
                }
            },
            (None, None) => Ok(None),
            (group, participant_id) => {
                tracing::debug!(
                    has_group = group.is_some(),
                    has_participant_id = participant_id.is_some(),
                    "Discarding partial stored session"
                );
                Ok(None)
            }
        }
    }

    fn persist(&self, session: &ParticipantSession) -> Result<(), StorageError> {
        self.store.set(GROUP_KEY, session.group.as_str())?;
        self.store.set(PARTICIPANT_ID_KEY, &session.participant_id)?;
        Ok(())
    }

    /// Forget the stored session so the next resolve starts fresh
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.delete(GROUP_KEY)?;
        self.store.delete(PARTICIPANT_ID_KEY)?;
        tracing::info!("Cleared participant session");
        Ok(())
    }
}

impl std::fmt::Debug for SessionBootstrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBootstrapper").finish_non_exhaustive()
    }
}
