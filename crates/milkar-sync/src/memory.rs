//! In-process [`DocumentStore`] backend.
//!
//! This is the reference implementation of the store contract and the
//! backend every test runs against. It also carries two failure toggles
//! (offline, failing deletes) so callers can exercise their partial-failure
//! paths without a real network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use milkar_shared::types::EventId;
use milkar_shared::{ArchivedEvent, Event, EventDraft};
use tracing::{debug, info};

use crate::error::{Result, SyncError};
use crate::snapshots::{SnapshotPublisher, Snapshots};
use crate::store::DocumentStore;

#[derive(Default)]
struct Inner {
    events: Vec<Event>,
    archive: Vec<ArchivedEvent>,
}

/// Shared-store double backed by two in-memory collections.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    events_pub: SnapshotPublisher<Event>,
    archive_pub: SnapshotPublisher<ArchivedEvent>,
    offline: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backend being unreachable. While set, every operation
    /// fails with [`SyncError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Make `delete_event` fail while leaving every other operation
    /// working. Used to exercise the copy-then-delete settlement path.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Insert a fully-formed event document, bypassing draft validation.
    /// Lets tests control ids and timestamps.
    pub fn seed_event(&self, event: Event) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.events.push(event);
        self.events_pub.publish(sorted_events(&inner.events));
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SyncError::Unavailable("simulated outage".into()));
        }
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| SyncError::Unavailable(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| SyncError::Unavailable(format!("lock poisoned: {e}")))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_event(&self, draft: EventDraft) -> Result<Event> {
        self.check_online()?;

        let event = draft.into_event(EventId::new(), Utc::now());
        debug!(event_id = %event.id, room_code = %event.room_code, "event created");

        let mut inner = self.write()?;
        inner.events.push(event.clone());
        self.events_pub.publish(sorted_events(&inner.events));

        Ok(event)
    }

    async fn get_event(&self, id: &EventId) -> Result<Event> {
        self.check_online()?;

        self.read()?
            .events
            .iter()
            .find(|e| e.id == *id)
            .cloned()
            .ok_or(SyncError::NotFound)
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.check_online()?;
        Ok(sorted_events(&self.read()?.events))
    }

    async fn put_event(&self, event: &Event) -> Result<()> {
        self.check_online()?;

        let mut inner = self.write()?;
        let slot = inner
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or(SyncError::NotFound)?;
        *slot = event.clone();

        debug!(event_id = %event.id, "event replaced");
        self.events_pub.publish(sorted_events(&inner.events));
        Ok(())
    }

    async fn delete_event(&self, id: &EventId) -> Result<()> {
        self.check_online()?;
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(SyncError::Unavailable("simulated delete failure".into()));
        }

        let mut inner = self.write()?;
        let before = inner.events.len();
        inner.events.retain(|e| e.id != *id);

        if inner.events.len() < before {
            debug!(event_id = %id, "event deleted");
            self.events_pub.publish(sorted_events(&inner.events));
        }
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<Snapshots<Event>> {
        self.check_online()?;
        Ok(self.events_pub.subscribe())
    }

    async fn append_archive(&self, entry: &ArchivedEvent) -> Result<()> {
        self.check_online()?;

        let mut inner = self.write()?;
        inner.archive.push(entry.clone());

        info!(
            event_id = %entry.event.id,
            auto = entry.auto_archived,
            "event archived"
        );
        self.archive_pub.publish(sorted_archive(&inner.archive));
        Ok(())
    }

    async fn list_archive(&self) -> Result<Vec<ArchivedEvent>> {
        self.check_online()?;
        Ok(sorted_archive(&self.read()?.archive))
    }

    async fn subscribe_archive(&self) -> Result<Snapshots<ArchivedEvent>> {
        self.check_online()?;
        Ok(self.archive_pub.subscribe())
    }
}

fn sorted_events(events: &[Event]) -> Vec<Event> {
    let mut snapshot = events.to_vec();
    snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    snapshot
}

fn sorted_archive(archive: &[ArchivedEvent]) -> Vec<ArchivedEvent> {
    let mut snapshot = archive.to_vec();
    snapshot.sort_by(|a, b| b.archived_at.cmp(&a.archived_at));
    snapshot
}
