//! Shared event documents.
//!
//! An [`Event`] is the server-of-record shape for one expense room. The
//! fields serialize camelCase so documents stay byte-compatible with what
//! the original web clients read and write.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MilkarError;
use crate::participant::Participant;
use crate::types::{EventId, ParticipantId, RoomCode};

/// A shared-expense room: one bill, a per-head share, and the roster of
/// payment claims against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the store on creation.
    pub id: EventId,
    pub title: String,
    pub total_amount: Decimal,
    pub member_count: u32,
    /// Derived: `total_amount / member_count`, two decimals. Recomputed on
    /// every edit of the amount or the count.
    pub per_person: Decimal,
    /// Immutable once assigned.
    pub room_code: RoomCode,
    pub creator_name: String,
    pub creator_payment_handle: String,
    /// Immutable once assigned; ownership checks match on this.
    pub creator_id: ParticipantId,
    /// Grows only by append (one entry per participant). Verification
    /// rewrites an entry in place, nothing is ever removed.
    pub contributions: Vec<Contribution>,
    /// Assigned by the store on creation.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// The contribution a participant has on this event, if any.
    pub fn contribution(&self, participant_id: &ParticipantId) -> Option<&Contribution> {
        self.contributions
            .iter()
            .find(|c| c.participant_id == *participant_id)
    }

    /// True when the requester owns this event.
    pub fn is_creator(&self, requester: &ParticipantId) -> bool {
        self.creator_id == *requester
    }

    /// Apply a creator edit, recomputing the per-head share when the
    /// amount or the member count changed. Validates every field before
    /// touching the document, so a rejected patch changes nothing.
    pub fn apply_patch(&mut self, patch: &EventPatch) -> Result<(), MilkarError> {
        let title = match &patch.title {
            Some(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(MilkarError::Validation(
                        "event title must not be empty".into(),
                    ));
                }
                Some(title.to_string())
            }
            None => None,
        };

        if let Some(total) = patch.total_amount {
            if total <= Decimal::ZERO {
                return Err(MilkarError::Validation(format!(
                    "total amount must be positive, got {total}"
                )));
            }
        }
        if patch.member_count == Some(0) {
            return Err(MilkarError::Validation(
                "member count must be positive".into(),
            ));
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(total) = patch.total_amount {
            self.total_amount = total;
        }
        if let Some(count) = patch.member_count {
            self.member_count = count;
        }
        if patch.total_amount.is_some() || patch.member_count.is_some() {
            self.per_person = per_person(self.total_amount, self.member_count);
        }

        Ok(())
    }
}

/// A self-reported payment claim attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub participant_name: String,
    pub participant_id: ParticipantId,
    /// Free-text note left by the claimant.
    pub note: String,
    /// Last digits of the claimant's payment reference. A spam deterrent,
    /// never checked against any payment system.
    pub reference_suffix: String,
    /// Flipped to true by the creator, never back.
    pub verified: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Validated input for hosting a new event. The store assigns `id` and
/// `created_at` when the draft lands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub total_amount: Decimal,
    pub member_count: u32,
    pub per_person: Decimal,
    pub room_code: RoomCode,
    pub creator_name: String,
    pub creator_payment_handle: String,
    pub creator_id: ParticipantId,
    pub contributions: Vec<Contribution>,
}

impl EventDraft {
    /// Validate host input and derive the per-head share and a fresh room
    /// code. Title must be non-blank, amount and count positive.
    pub fn new(
        title: &str,
        total_amount: Decimal,
        member_count: u32,
        creator: &Participant,
    ) -> Result<Self, MilkarError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MilkarError::Validation(
                "event title must not be empty".into(),
            ));
        }
        if total_amount <= Decimal::ZERO {
            return Err(MilkarError::Validation(format!(
                "total amount must be positive, got {total_amount}"
            )));
        }
        if member_count == 0 {
            return Err(MilkarError::Validation(
                "member count must be positive".into(),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            total_amount,
            member_count,
            per_person: per_person(total_amount, member_count),
            room_code: RoomCode::generate(),
            creator_name: creator.display_name.clone(),
            creator_payment_handle: creator.payment_handle.clone(),
            creator_id: creator.participant_id.clone(),
            contributions: Vec::new(),
        })
    }

    /// Promote the draft into a stored document. Called by store
    /// implementations once they have assigned identity and time.
    pub fn into_event(self, id: EventId, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            total_amount: self.total_amount,
            member_count: self.member_count,
            per_person: self.per_person,
            room_code: self.room_code,
            creator_name: self.creator_name,
            creator_payment_handle: self.creator_payment_handle,
            creator_id: self.creator_id,
            contributions: self.contributions,
            created_at,
        }
    }
}

/// A creator edit. The room code and creator identity have no
/// representation here: they are immutable once assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub total_amount: Option<Decimal>,
    pub member_count: Option<u32>,
}

/// Per-head share: total divided by members, rounded to two decimals
/// (midpoint away from zero) and always carrying two decimal places.
pub fn per_person(total: Decimal, members: u32) -> Decimal {
    let mut share = (total / Decimal::from(members))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    share.rescale(2);
    share
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> Participant {
        Participant::new("Asha", "asha@upi").unwrap()
    }

    #[test]
    fn test_per_person_exact_split() {
        let share = per_person(Decimal::from(1000), 4);
        assert_eq!(share.to_string(), "250.00");
    }

    #[test]
    fn test_per_person_rounds_to_two_decimals() {
        let share = per_person(Decimal::from(1000), 3);
        assert_eq!(share.to_string(), "333.33");

        let share = per_person("100.01".parse().unwrap(), 2);
        assert_eq!(share.to_string(), "50.01"); // 50.005 rounds away from zero
    }

    #[test]
    fn test_draft_dinner_for_four() {
        let draft = EventDraft::new("Dinner", Decimal::from(1000), 4, &creator()).unwrap();
        assert_eq!(draft.per_person.to_string(), "250.00");
        assert_eq!(draft.room_code.as_str().len(), 6);
        assert!(draft.contributions.is_empty());
    }

    #[test]
    fn test_draft_rejects_bad_input() {
        let c = creator();
        assert!(EventDraft::new("  ", Decimal::from(100), 2, &c).is_err());
        assert!(EventDraft::new("Chai", Decimal::ZERO, 2, &c).is_err());
        assert!(EventDraft::new("Chai", Decimal::from(-5), 2, &c).is_err());
        assert!(EventDraft::new("Chai", Decimal::from(100), 0, &c).is_err());
    }

    #[test]
    fn test_patch_recomputes_per_person() {
        let mut event = EventDraft::new("Dinner", Decimal::from(1000), 4, &creator())
            .unwrap()
            .into_event(EventId::new(), Utc::now());

        event
            .apply_patch(&EventPatch {
                member_count: Some(3),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(event.per_person.to_string(), "333.33");

        event
            .apply_patch(&EventPatch {
                total_amount: Some(Decimal::from(900)),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(event.per_person.to_string(), "300.00");
    }

    #[test]
    fn test_patch_title_only_keeps_share() {
        let mut event = EventDraft::new("Dinner", Decimal::from(1000), 4, &creator())
            .unwrap()
            .into_event(EventId::new(), Utc::now());
        let before = event.per_person;

        event
            .apply_patch(&EventPatch {
                title: Some("Dinner + dessert".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(event.title, "Dinner + dessert");
        assert_eq!(event.per_person, before);
    }

    #[test]
    fn test_patch_rejects_invalid_values() {
        let mut event = EventDraft::new("Dinner", Decimal::from(1000), 4, &creator())
            .unwrap()
            .into_event(EventId::new(), Utc::now());

        assert!(event
            .apply_patch(&EventPatch {
                total_amount: Some(Decimal::ZERO),
                ..Default::default()
            })
            .is_err());
        assert!(event
            .apply_patch(&EventPatch {
                member_count: Some(0),
                ..Default::default()
            })
            .is_err());

        // A patch that fails validation must not half-apply.
        let err = event.apply_patch(&EventPatch {
            title: Some("Brunch".into()),
            member_count: Some(0),
            ..Default::default()
        });
        assert!(err.is_err());
        assert_eq!(event.title, "Dinner");
        assert_eq!(event.member_count, 4);
    }

    #[test]
    fn test_document_shape_is_camel_case() {
        let event = EventDraft::new("Dinner", Decimal::from(1000), 4, &creator())
            .unwrap()
            .into_event(EventId::new(), Utc::now());

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("perPerson").is_some());
        assert!(json.get("roomCode").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["perPerson"], serde_json::json!("250.00"));
    }
}
