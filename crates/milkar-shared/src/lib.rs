//! # milkar-shared
//!
//! Domain documents and rules for the Milkar bill-splitting app: the
//! shapes every crate exchanges (events, contributions, archive entries,
//! participant profiles), the pure ledger/settlement transition functions,
//! and the payment-link builders.
//!
//! Everything here is synchronous and store-agnostic so the rules can be
//! exercised without a live document store.

pub mod constants;
pub mod event;
pub mod ledger;
pub mod participant;
pub mod payment;
pub mod settlement;
pub mod types;

mod error;

pub use error::MilkarError;
pub use event::{Contribution, Event, EventDraft, EventPatch};
pub use participant::Participant;
pub use settlement::ArchivedEvent;
pub use types::{EventId, ParticipantId, RoomCode};
