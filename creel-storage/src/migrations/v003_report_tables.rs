//! v003: reports.

use rusqlite::Connection;

use creel_core::errors::StorageError;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reports (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            report_type   TEXT NOT NULL,
            period_start  TEXT NOT NULL,
            period_end    TEXT NOT NULL,
            summary       TEXT NOT NULL,
            generated_at  TEXT NOT NULL,
            created_by    INTEGER REFERENCES inspectors(id) ON DELETE SET NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_period ON reports(report_type, period_start);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
