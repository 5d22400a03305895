//! Reading the archive.
//!
//! The archive is read-only through normal flow; entries land there via
//! settlement or the sweep and are never edited or individually removed.

use milkar_shared::ArchivedEvent;
use milkar_sync::{DocumentStore, Snapshots};

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Settled and expired events, most recently archived first.
    pub async fn archived(&self) -> Result<Vec<ArchivedEvent>> {
        Ok(self.store.list_archive().await?)
    }

    /// Live subscription to the archive.
    pub async fn subscribe_archive(&self) -> Result<Snapshots<ArchivedEvent>> {
        Ok(self.store.subscribe_archive().await?)
    }
}
