//! Hosting and editing events.
//!
//! Writes follow one shape: fetch the current document, run the pure
//! transition from `milkar-shared`, write the whole document back. The
//! store orders concurrent writers (last write wins per document); the
//! transition rules themselves are never bypassed.

use milkar_shared::types::EventId;
use milkar_shared::{Event, EventDraft, EventPatch, MilkarError, Participant};
use milkar_sync::{DocumentStore, Snapshots};
use rust_decimal::Decimal;
use tracing::info;

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Host a new event. The freshly assigned room code is unlocked
    /// locally as a side effect, so the host sees their own room without
    /// joining it.
    pub async fn create_event(
        &self,
        title: &str,
        total_amount: Decimal,
        member_count: u32,
        creator: &Participant,
    ) -> Result<Event> {
        let draft = EventDraft::new(title, total_amount, member_count, creator)?;
        let event = self.store.create_event(draft).await?;

        self.local()?.unlock_room(&event.room_code)?;
        info!(event_id = %event.id, room_code = %event.room_code, "event hosted");
        Ok(event)
    }

    /// Edit title, total, or head count. Creator-only; the per-head share
    /// is recomputed inside the patch application.
    pub async fn update_event(
        &self,
        id: &EventId,
        patch: &EventPatch,
        requester: &Participant,
    ) -> Result<Event> {
        let mut event = self.store.get_event(id).await?;
        if !event.is_creator(&requester.participant_id) {
            return Err(MilkarError::Permission("edit this event"));
        }

        event.apply_patch(patch)?;
        self.store.put_event(&event).await?;

        info!(event_id = %id, "event updated");
        Ok(event)
    }

    /// Permanently remove a live event, bypassing the archive. Creator-only.
    pub async fn delete_event(&self, id: &EventId, requester: &Participant) -> Result<()> {
        let event = self.store.get_event(id).await?;
        if !event.is_creator(&requester.participant_id) {
            return Err(MilkarError::Permission("delete this event"));
        }

        self.store.delete_event(id).await?;
        info!(event_id = %id, "event deleted");
        Ok(())
    }

    /// One-shot fetch of all live events, newest first.
    pub async fn live_events(&self) -> Result<Vec<Event>> {
        Ok(self.store.list_events().await?)
    }

    /// Live subscription to the full event set. Drop (or `cancel`) the
    /// handle when the consuming view goes away.
    pub async fn subscribe_events(&self) -> Result<Snapshots<Event>> {
        Ok(self.store.subscribe_events().await?)
    }
}
