//! v001 -- Initial schema creation.
//!
//! Creates the three local tables: `profile`, `unlocked_rooms`, and
//! `app_settings`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Profile (single row: who this device logs in as)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS profile (
    id             INTEGER PRIMARY KEY CHECK (id = 1),
    display_name   TEXT NOT NULL,
    payment_handle TEXT NOT NULL,               -- UPI handle, e.g. name@bank
    participant_id TEXT NOT NULL,               -- display_name#NNNN
    saved_at       TEXT NOT NULL                -- ISO-8601 / RFC-3339
);

-- ----------------------------------------------------------------
-- Unlocked rooms (codes this device has joined or created)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS unlocked_rooms (
    code        TEXT PRIMARY KEY NOT NULL,      -- six digits
    unlocked_at TEXT NOT NULL
);

-- ----------------------------------------------------------------
-- App settings (single JSON row)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS app_settings (
    id   INTEGER PRIMARY KEY CHECK (id = 1),
    json TEXT NOT NULL
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
