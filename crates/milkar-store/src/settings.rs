//! App settings, stored as a single JSON row.

use rusqlite::params;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::database::Database;
use crate::error::Result;

/// User-tweakable settings. Serialized as one JSON document so adding a
/// field only needs a serde default, not a schema migration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// UI language tag: `en`, `hi`, or `hr`.
    pub language: String,
    pub dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: "en".into(),
            dark_mode: true,
        }
    }
}

impl Database {
    /// Load the saved settings, falling back to defaults when none were
    /// ever saved.
    pub fn settings(&self) -> Result<AppSettings> {
        let result: std::result::Result<String, _> =
            self.conn()
                .query_row("SELECT json FROM app_settings WHERE id = 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(AppSettings::default()),
            Err(other) => Err(other.into()),
        }
    }

    /// Save (or replace) the settings row.
    pub fn update_settings(&self, settings: &AppSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;

        self.conn().execute(
            "INSERT OR REPLACE INTO app_settings (id, json) VALUES (1, ?1)",
            params![json],
        )?;

        info!(language = %settings.language, dark_mode = settings.dark_mode, "settings updated");
        Ok(())
    }
}
