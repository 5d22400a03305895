//! Settings passthrough.

use milkar_store::AppSettings;
use milkar_sync::DocumentStore;

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Current settings (defaults when never saved).
    pub fn settings(&self) -> Result<AppSettings> {
        Ok(self.local()?.settings()?)
    }

    /// Persist new settings.
    pub fn update_settings(&self, settings: &AppSettings) -> Result<()> {
        Ok(self.local()?.update_settings(settings)?)
    }
}
