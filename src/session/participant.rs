//! Participant identity and group assignment

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Builder;

/// Experimental condition a participant is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Control,
    Intervention,
}

impl Group {
    /// Tag written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Control => "control",
            Group::Intervention => "intervention",
        }
    }

    /// Human-readable label for the header
    pub fn label(&self) -> &'static str {
        match self {
            Group::Control => "Control",
            Group::Intervention => "Intervention",
        }
    }

    /// Fair coin flip between the two groups
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Group::Control
        } else {
            Group::Intervention
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown group tag: {0:?}")]
pub struct ParseGroupError(pub String);

impl FromStr for Group {
    type Err = ParseGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "control" => Ok(Group::Control),
            "intervention" => Ok(Group::Intervention),
            other => Err(ParseGroupError(other.to_string())),
        }
    }
}

/// A participant's stable identity and group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSession {
    pub participant_id: String,
    pub group: Group,
}

impl ParticipantSession {
    pub fn new(participant_id: impl Into<String>, group: Group) -> Self {
        Self {
            participant_id: participant_id.into(),
            group,
        }
    }

    /// Draw a fresh group and id
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let group = Group::random(rng);
        Self {
            participant_id: generate_participant_id(rng),
            group,
        }
    }
}

/// Generate an opaque participant id.
///
/// Uses a v4 UUID from the OS random source. If that source fails, falls back
/// to `<unix-millis>-<16 hex chars>` drawn from `rng`.
pub fn generate_participant_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "OS random source unavailable, using fallback participant id");
            fallback_participant_id(rng)
        }
    }
}

pub(crate) fn fallback_participant_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}-{:016x}",
        Utc::now().timestamp_millis(),
        rng.random::<u64>()
    )
}
