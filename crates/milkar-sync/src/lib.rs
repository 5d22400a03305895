//! # milkar-sync
//!
//! The shared document store contract. Every event and archive entry
//! visible across devices flows through a [`DocumentStore`]: a passive
//! remote collection pair offering CRUD plus live full-snapshot
//! subscriptions. The store holds no app logic; all transition rules live
//! in `milkar-shared` and are applied by the client before writing.
//!
//! [`MemoryStore`] is the in-process reference backend, used directly in
//! tests and as the template for real backends.

pub mod memory;
pub mod snapshots;
pub mod store;

mod error;

pub use error::SyncError;
pub use memory::MemoryStore;
pub use snapshots::{SnapshotPublisher, Snapshots};
pub use store::DocumentStore;
