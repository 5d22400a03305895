//! Persistence for the saved [`Participant`] profile.
//!
//! One profile per device. Logging in overwrites it, logging out deletes
//! it; the unlocked room set is deliberately untouched by either.

use chrono::Utc;
use milkar_shared::types::ParticipantId;
use milkar_shared::Participant;
use rusqlite::params;

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Save (or replace) the device profile.
    pub fn save_profile(&self, profile: &Participant) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO profile (id, display_name, payment_handle, participant_id, saved_at)
             VALUES (1, ?1, ?2, ?3, ?4)",
            params![
                profile.display_name,
                profile.payment_handle,
                profile.participant_id.as_str(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Load the saved profile, if any.
    pub fn load_profile(&self) -> Result<Option<Participant>> {
        let result = self.conn().query_row(
            "SELECT display_name, payment_handle, participant_id
             FROM profile
             WHERE id = 1",
            [],
            |row| {
                Ok(Participant {
                    display_name: row.get(0)?,
                    payment_handle: row.get(1)?,
                    participant_id: ParticipantId(row.get(2)?),
                })
            },
        );

        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(other) => Err(other.into()),
        }
    }

    /// Delete the saved profile.  Returns `true` if a row was deleted.
    pub fn clear_profile(&self) -> Result<bool> {
        let affected = self.conn().execute("DELETE FROM profile WHERE id = 1", [])?;
        Ok(affected > 0)
    }
}
