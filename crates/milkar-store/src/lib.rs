//! # milkar-store
//!
//! Device-local storage for the Milkar client, backed by SQLite.
//!
//! Only data private to this device lives here: the saved participant
//! profile, the set of room codes this device has unlocked, and app
//! settings. Shared event documents never touch this crate; they live in
//! the remote document store behind `milkar-sync`.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed helpers for each table.

pub mod database;
pub mod migrations;
pub mod profile;
pub mod rooms;
pub mod settings;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use settings::AppSettings;
