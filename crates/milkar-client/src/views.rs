//! Render-ready projections of shared documents.
//!
//! The UI never touches `Event` directly; it gets an [`EventView`] with
//! amounts pre-formatted, links pre-built for this viewer, and claims in
//! leaderboard order. Serialized camelCase to match the document shape.

use milkar_shared::{ledger, payment, settlement, Event, Participant};
use milkar_sync::DocumentStore;
use serde::Serialize;

use crate::state::App;

/// One event as the given viewer sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub id: String,
    pub title: String,
    pub total_amount: String,
    pub per_person: String,
    pub member_count: u32,
    pub room_code: String,
    pub creator_name: String,
    /// Whether the viewer is the creator (controls edit/verify/settle
    /// affordances).
    pub is_creator: bool,
    pub verified_count: usize,
    pub is_full: bool,
    pub payment_uri: String,
    pub qr_url: String,
    pub share_text: String,
    pub share_url: String,
    pub created_at: String,
    pub claims: Vec<ClaimView>,
}

/// One ledger row in leaderboard order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimView {
    pub participant_name: String,
    pub note: String,
    pub reference_suffix: String,
    pub verified: bool,
    /// 1..=3 for the first three verified claims.
    pub rank: Option<u8>,
    pub is_mine: bool,
    pub submitted_at: String,
}

impl<S: DocumentStore> App<S> {
    /// Project one event for rendering by `viewer`.
    pub fn event_view(&self, event: &Event, viewer: &Participant) -> EventView {
        let payment_uri = payment::event_upi_uri(event);
        let qr_url = payment::qr_image_url(&self.config.qr_endpoint, &payment_uri);
        let share_text = payment::nudge_text(event);
        let share_url = payment::share_url(&self.config.share_endpoint, &share_text);

        let claims = ledger::leaderboard(event)
            .into_iter()
            .map(|row| ClaimView {
                participant_name: row.claim.participant_name.clone(),
                note: row.claim.note.clone(),
                reference_suffix: row.claim.reference_suffix.clone(),
                verified: row.claim.verified,
                rank: row.rank,
                is_mine: row.claim.participant_id == viewer.participant_id,
                submitted_at: row.claim.submitted_at.to_rfc3339(),
            })
            .collect();

        EventView {
            id: event.id.to_string(),
            title: event.title.clone(),
            total_amount: event.total_amount.to_string(),
            per_person: event.per_person.to_string(),
            member_count: event.member_count,
            room_code: event.room_code.to_string(),
            creator_name: event.creator_name.clone(),
            is_creator: event.is_creator(&viewer.participant_id),
            verified_count: settlement::verified_count(event),
            is_full: settlement::is_full(event),
            payment_uri,
            qr_url,
            share_text,
            share_url,
            created_at: event.created_at.to_rfc3339(),
            claims,
        }
    }
}
