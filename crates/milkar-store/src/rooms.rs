//! The set of room codes this device has unlocked.
//!
//! Unlocking is monotonic: codes are added when a room is created or
//! joined and never removed, so a settled event stays readable in the
//! archive without re-entering its code.

use chrono::Utc;
use milkar_shared::types::RoomCode;
use rusqlite::params;

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Record a room code as unlocked.  Idempotent.
    pub fn unlock_room(&self, code: &RoomCode) -> Result<()> {
        self.conn().execute(
            "INSERT OR IGNORE INTO unlocked_rooms (code, unlocked_at)
             VALUES (?1, ?2)",
            params![code.as_str(), Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// List every unlocked room code, oldest first.
    pub fn unlocked_rooms(&self) -> Result<Vec<RoomCode>> {
        let mut stmt = self.conn().prepare(
            "SELECT code
             FROM unlocked_rooms
             ORDER BY unlocked_at ASC, code ASC",
        )?;

        let rows = stmt.query_map([], row_to_room_code)?;

        let mut codes = Vec::new();
        for row in rows {
            codes.push(row?);
        }
        Ok(codes)
    }

    /// Whether this device has unlocked the given code.
    pub fn is_unlocked(&self, code: &RoomCode) -> Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM unlocked_rooms WHERE code = ?1",
            params![code.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

/// Map a `rusqlite::Row` to a [`RoomCode`].
fn row_to_room_code(row: &rusqlite::Row<'_>) -> rusqlite::Result<RoomCode> {
    let code: String = row.get(0)?;
    RoomCode::parse(&code).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
