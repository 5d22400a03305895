//! The [`DocumentStore`] contract.

use async_trait::async_trait;
use milkar_shared::types::EventId;
use milkar_shared::{ArchivedEvent, Event, EventDraft};

use crate::error::Result;
use crate::snapshots::Snapshots;

/// A passive pair of shared collections: live events and the settled
/// archive.
///
/// The store validates nothing and decides nothing. Callers read a
/// document, apply the transition rules from `milkar-shared`, and write
/// the whole document back; concurrent writers resolve last-write-wins at
/// document granularity. Both collections support live full-snapshot
/// subscriptions (see [`Snapshots`]).
///
/// Archive entries are append-only: there is no update or delete for
/// them, and a settlement retried after a partial failure may append the
/// same event twice. Readers tolerate duplicates.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Persist a drafted event. The store assigns the document id and the
    /// `created_at` timestamp, and returns the stored document.
    async fn create_event(&self, draft: EventDraft) -> Result<Event>;

    /// Fetch one live event. `NotFound` if it never existed or was
    /// deleted by settlement.
    async fn get_event(&self, id: &EventId) -> Result<Event>;

    /// All live events, newest first.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Replace a live event wholesale. `NotFound` if it no longer exists;
    /// the replaced version is not inspected (last write wins).
    async fn put_event(&self, event: &Event) -> Result<()>;

    /// Remove a live event. Removing an id that is already gone is Ok, so
    /// two racing settlements both succeed.
    async fn delete_event(&self, id: &EventId) -> Result<()>;

    /// Subscribe to the live events collection.
    async fn subscribe_events(&self) -> Result<Snapshots<Event>>;

    /// Append one settled event to the archive.
    async fn append_archive(&self, entry: &ArchivedEvent) -> Result<()>;

    /// All archive entries, most recently archived first.
    async fn list_archive(&self) -> Result<Vec<ArchivedEvent>>;

    /// Subscribe to the archive collection.
    async fn subscribe_archive(&self) -> Result<Snapshots<ArchivedEvent>>;
}
