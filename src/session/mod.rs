//! Participant session: stable group assignment and opaque id

mod bootstrap;
mod participant;

pub use bootstrap::{
    ResolvedSession, SessionBootstrapper, SessionOrigin, GROUP_KEY, PARTICIPANT_ID_KEY,
};
pub use participant::{generate_participant_id, Group, ParseGroupError, ParticipantSession};
