//! # milkar-client
//!
//! The application service tying the Milkar pieces together: a local
//! profile/room database (`milkar-store`), a shared document store
//! (`milkar-sync`), and the pure transition rules (`milkar-shared`).
//!
//! Every flow the UI drives (login, hosting, joining by room code,
//! claiming payments, verifying, settling) is a method on [`App`]. The
//! service is generic over the [`DocumentStore`] backend, so the whole
//! crate is exercised in tests against the in-memory store.
//!
//! [`DocumentStore`]: milkar_sync::DocumentStore

pub mod archive;
pub mod claims;
pub mod config;
pub mod events;
pub mod rooms;
pub mod session;
pub mod settings;
pub mod settlement;
pub mod state;
pub mod views;

pub use config::AppConfig;
pub use milkar_store::AppSettings;
pub use state::App;
pub use views::{ClaimView, EventView};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, milkar_shared::MilkarError>;
