//! Application service state.
//!
//! [`App`] owns the three halves of the client: configuration, a handle
//! to the shared [`DocumentStore`], and the device-local database. It is
//! `Send + Sync` and designed to sit behind an `Arc` for the lifetime of
//! the process, with every UI flow expressed as a method on it.

use std::sync::{Arc, Mutex, MutexGuard};

use milkar_shared::MilkarError;
use milkar_store::Database;
use milkar_sync::DocumentStore;

use crate::config::AppConfig;
use crate::Result;

/// Central application service, generic over the shared store backend.
pub struct App<S: DocumentStore> {
    pub(crate) config: AppConfig,
    pub(crate) store: Arc<S>,
    /// Local database guarded by a mutex. Critical sections are short and
    /// the guard is never held across an await.
    local: Mutex<Database>,
}

impl<S: DocumentStore> App<S> {
    /// Open the local database per `config` and assemble the service.
    pub fn open(config: AppConfig, store: Arc<S>) -> Result<Self> {
        let local = match &config.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .map_err(|e| MilkarError::LocalStore(format!("create data dir: {e}")))?;
                Database::open_at(&dir.join("milkar.db"))?
            }
            None => Database::new()?,
        };

        Ok(Self::with_database(config, store, local))
    }

    /// Assemble the service around an already-open local database.
    pub fn with_database(config: AppConfig, store: Arc<S>, local: Database) -> Self {
        Self {
            config,
            store,
            local: Mutex::new(local),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lock the local database.
    pub(crate) fn local(&self) -> Result<MutexGuard<'_, Database>> {
        self.local
            .lock()
            .map_err(|e| MilkarError::LocalStore(format!("lock poisoned: {e}")))
    }
}
