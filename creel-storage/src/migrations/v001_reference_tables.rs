//! v001: waters, inspectors, sanctions, violation_types.

use rusqlite::Connection;

use creel_core::errors::StorageError;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS waters (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            kind        TEXT NOT NULL,
            region      TEXT,
            description TEXT,
            latitude    REAL,
            longitude   REAL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS inspectors (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS sanctions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            code          TEXT UNIQUE,
            description   TEXT NOT NULL,
            ordinal_rank  INTEGER NOT NULL UNIQUE,
            created_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_sanctions_rank ON sanctions(ordinal_rank);

        CREATE TABLE IF NOT EXISTS violation_types (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            code                 TEXT NOT NULL UNIQUE,
            description          TEXT NOT NULL UNIQUE,
            detail_text          TEXT,
            default_sanction_id  INTEGER REFERENCES sanctions(id) ON DELETE SET NULL,
            repeat_sanction_id   INTEGER REFERENCES sanctions(id) ON DELETE SET NULL,
            created_at           TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
