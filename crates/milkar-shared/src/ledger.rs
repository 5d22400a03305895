//! Contribution ledger rules.
//!
//! Pure transitions over [`Event`] documents: appending a payment claim,
//! verifying one, and the leaderboard projection. The caller owns the
//! read-modify-write cycle against the store; these functions only decide
//! what a legal transition looks like.

use chrono::{DateTime, Utc};

use crate::constants::{DEFAULT_CLAIM_NOTE, MIN_REFERENCE_SUFFIX};
use crate::error::MilkarError;
use crate::event::{Contribution, Event};
use crate::participant::Participant;
use crate::types::ParticipantId;

/// Append a payment claim for `claimant`.
///
/// One claim per participant: a second claim from the same id is rejected
/// outright. The reference suffix is friction against drive-by spam, so a
/// trimmed minimum length is all that is asked of it. An empty note falls
/// back to [`DEFAULT_CLAIM_NOTE`].
pub fn append_claim(
    event: &mut Event,
    claimant: &Participant,
    reference_suffix: &str,
    note: &str,
    now: DateTime<Utc>,
) -> Result<(), MilkarError> {
    let suffix = reference_suffix.trim();
    if suffix.len() < MIN_REFERENCE_SUFFIX {
        return Err(MilkarError::Validation(format!(
            "payment reference must be at least {MIN_REFERENCE_SUFFIX} characters"
        )));
    }

    if event.contribution(&claimant.participant_id).is_some() {
        return Err(MilkarError::DuplicateClaim {
            participant_id: claimant.participant_id.clone(),
        });
    }

    let note = note.trim();
    event.contributions.push(Contribution {
        participant_name: claimant.display_name.clone(),
        participant_id: claimant.participant_id.clone(),
        note: if note.is_empty() {
            DEFAULT_CLAIM_NOTE.to_string()
        } else {
            note.to_string()
        },
        reference_suffix: suffix.to_string(),
        verified: false,
        submitted_at: now,
    });

    Ok(())
}

/// Mark a contributor's claim verified. Creator-only.
///
/// Returns `true` when the flag actually flipped; verifying an already
/// verified claim is a no-op and returns `false`, so callers can skip the
/// write-back.
pub fn verify_claim(
    event: &mut Event,
    contributor: &ParticipantId,
    requester: &ParticipantId,
) -> Result<bool, MilkarError> {
    if !event.is_creator(requester) {
        return Err(MilkarError::Permission("verify contributions"));
    }

    let entry = event
        .contributions
        .iter_mut()
        .find(|c| c.participant_id == *contributor)
        .ok_or_else(|| {
            MilkarError::Validation(format!(
                "{contributor} has not claimed a payment on this event"
            ))
        })?;

    if entry.verified {
        return Ok(false);
    }
    entry.verified = true;
    Ok(true)
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedClaim<'a> {
    /// 1..=3 for the first three verified claims, in submission order.
    pub rank: Option<u8>,
    pub claim: &'a Contribution,
}

/// Claims in submission order (ascending `submitted_at`). Unverified
/// entries are listed but never ranked; they also never count as paid.
pub fn leaderboard(event: &Event) -> Vec<RankedClaim<'_>> {
    let mut ordered: Vec<&Contribution> = event.contributions.iter().collect();
    ordered.sort_by_key(|c| c.submitted_at);

    let mut next_rank = 1u8;
    ordered
        .into_iter()
        .map(|claim| {
            let rank = if claim.verified && next_rank <= 3 {
                let r = next_rank;
                next_rank += 1;
                Some(r)
            } else {
                None
            };
            RankedClaim { rank, claim }
        })
        .collect()
}
