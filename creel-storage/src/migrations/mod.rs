//! Versioned schema migrations, applied in order at engine startup.

pub mod v001_reference_tables;
pub mod v002_round_tables;
pub mod v003_report_tables;

use rusqlite::Connection;

use creel_core::errors::StorageError;

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 3;

/// All migrations in application order.
const MIGRATIONS: &[(u32, fn(&Connection) -> Result<(), StorageError>)] = &[
    (1, v001_reference_tables::migrate),
    (2, v002_round_tables::migrate),
    (3, v003_report_tables::migrate),
];

/// Run all pending migrations against the connection.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [*version],
        )
        .map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        tracing::info!(version, "applied schema migration");
    }
    Ok(())
}

/// Highest applied schema version, 0 when none.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get::<_, u32>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
