use thiserror::Error;

use crate::types::{ParticipantId, RoomCode};

/// Errors surfaced to the acting user. Every variant is a blocking
/// notice in the embedding shell, and none of them leave partial state
/// behind.
#[derive(Error, Debug)]
pub enum MilkarError {
    /// Malformed or missing input; the operation aborted before any write.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A creator-only action attempted by someone else.
    #[error("only the event creator can {0}")]
    Permission(&'static str),

    /// The participant already has a contribution on this event.
    #[error("{participant_id} has already claimed a payment on this event")]
    DuplicateClaim { participant_id: ParticipantId },

    /// No live event carries the entered room code.
    #[error("no live event with room code {0}")]
    UnknownRoomCode(RoomCode),

    /// Point lookup of an event document came back empty.
    #[error("event no longer exists")]
    EventNotFound,

    /// Settlement requested before every head was verified.
    #[error("cannot settle yet: {verified} of {required} shares verified")]
    NotFull { verified: usize, required: u32 },

    /// A local storage failure (profile or unlocked-room bookkeeping).
    #[error("local storage error: {0}")]
    LocalStore(String),

    /// The shared document store could not be reached.
    #[error("shared store unavailable: {0}")]
    StoreUnavailable(String),
}
