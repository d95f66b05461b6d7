//! v002: patrol_rounds, violations.

use rusqlite::Connection;

use creel_core::errors::StorageError;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS patrol_rounds (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            inspector_id  INTEGER NOT NULL REFERENCES inspectors(id) ON DELETE RESTRICT,
            water_id      INTEGER NOT NULL REFERENCES waters(id) ON DELETE RESTRICT,
            started_at    TEXT NOT NULL,
            ended_at      TEXT,
            notes         TEXT,
            status        TEXT NOT NULL DEFAULT 'active'
                          CHECK (status IN ('active', 'closed'))
        );

        CREATE INDEX IF NOT EXISTS idx_rounds_status ON patrol_rounds(status, ended_at);

        CREATE TABLE IF NOT EXISTS violations (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            round_id           INTEGER NOT NULL REFERENCES patrol_rounds(id) ON DELETE CASCADE,
            violation_type_id  INTEGER NOT NULL REFERENCES violation_types(id),
            license_number     TEXT,
            measure_taken      TEXT NOT NULL,
            details            TEXT,
            license_seized     INTEGER NOT NULL DEFAULT 0,
            recorded_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_violations_round ON violations(round_id);
        CREATE INDEX IF NOT EXISTS idx_violations_history
            ON violations(violation_type_id, license_number, recorded_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
