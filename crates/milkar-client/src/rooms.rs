//! Room directory: join-by-code and local visibility.
//!
//! The room code is the whole access model. The shared subscription
//! delivers every live event to every client; what a device may render
//! is decided here, by membership in its locally persisted unlocked set.

use std::collections::HashSet;

use milkar_shared::types::RoomCode;
use milkar_shared::{Event, MilkarError};
use milkar_sync::DocumentStore;
use tracing::info;

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Join a room by its 6-digit code.
    ///
    /// Scans the live events for a matching code; on a hit the code is
    /// unlocked locally and the event returned. On a miss nothing is
    /// unlocked; mistyped codes must not grow the set.
    pub async fn join_room(&self, code: &str) -> Result<Event> {
        let code = RoomCode::parse(code)?;

        let events = self.store.list_events().await?;
        let event = events
            .into_iter()
            .find(|e| e.room_code == code)
            .ok_or_else(|| MilkarError::UnknownRoomCode(code.clone()))?;

        self.local()?.unlock_room(&code)?;
        info!(room_code = %code, event_id = %event.id, "room joined");
        Ok(event)
    }

    /// Every code this device has unlocked, oldest first.
    pub fn unlocked_rooms(&self) -> Result<Vec<RoomCode>> {
        Ok(self.local()?.unlocked_rooms()?)
    }

    /// Filter a live snapshot down to the events this device has
    /// unlocked, preserving snapshot order.
    pub fn visible_events(&self, snapshot: &[Event]) -> Result<Vec<Event>> {
        let unlocked: HashSet<RoomCode> = self.local()?.unlocked_rooms()?.into_iter().collect();

        Ok(snapshot
            .iter()
            .filter(|e| unlocked.contains(&e.room_code))
            .cloned()
            .collect())
    }
}
