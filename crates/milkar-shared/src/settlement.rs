//! Settlement rules.
//!
//! Completion is always derived from the contribution ledger, never
//! stored: verifying one claim can flip an event to "full" without any
//! other field changing, and there is no status column to drift out of
//! sync. Archival itself (copy to the archive space, then delete the live
//! document) is orchestrated by the client layer; this module owns the
//! predicates and the terminal document shape.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MilkarError;
use crate::event::Event;
use crate::types::ParticipantId;

/// Number of verified contributions (the paid-head count).
pub fn verified_count(event: &Event) -> usize {
    event.contributions.iter().filter(|c| c.verified).count()
}

/// An event is full once every head has a verified claim.
pub fn is_full(event: &Event) -> bool {
    verified_count(event) >= event.member_count as usize
}

/// True when the event has outlived the expiry window.
pub fn is_expired(event: &Event, now: DateTime<Utc>, expiry_hours: i64) -> bool {
    now - event.created_at >= Duration::hours(expiry_hours)
}

/// Why the opportunistic sweep would archive a live event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveTrigger {
    /// Every head verified; the room is done.
    Full,
    /// Stale: older than the expiry window.
    Expired,
}

impl std::fmt::Display for ArchiveTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Sweep predicate: full events and stale events are archived without
/// user action. Returns `None` while the event should stay live.
pub fn auto_archive_trigger(
    event: &Event,
    now: DateTime<Utc>,
    expiry_hours: i64,
) -> Option<ArchiveTrigger> {
    if is_full(event) {
        Some(ArchiveTrigger::Full)
    } else if is_expired(event, now, expiry_hours) {
        Some(ArchiveTrigger::Expired)
    } else {
        None
    }
}

/// Gate for creator-initiated settlement: ownership first, then the
/// fullness precondition. Both re-checked on current data right before
/// the archive write.
pub fn ensure_settleable(event: &Event, requester: &ParticipantId) -> Result<(), MilkarError> {
    if !event.is_creator(requester) {
        return Err(MilkarError::Permission("settle this event"));
    }
    if !is_full(event) {
        return Err(MilkarError::NotFull {
            verified: verified_count(event),
            required: event.member_count,
        });
    }
    Ok(())
}

/// A settled or expired event in its terminal record space. The live
/// fields flatten into the document so the archived shape matches the
/// live one, with the archival stamp appended. The id is carried over:
/// archival copies, it does not mint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub archived_at: DateTime<Utc>,
    pub auto_archived: bool,
}

impl ArchivedEvent {
    /// Terminal entry for a creator-settled event.
    pub fn settled(event: Event, archived_at: DateTime<Utc>) -> Self {
        Self {
            event,
            archived_at,
            auto_archived: false,
        }
    }

    /// Terminal entry written by the opportunistic sweep.
    pub fn auto(event: Event, archived_at: DateTime<Utc>) -> Self {
        Self {
            event,
            archived_at,
            auto_archived: true,
        }
    }
}
