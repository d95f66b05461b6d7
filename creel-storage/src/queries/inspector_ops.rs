//! Inspector reference-data queries.

use rusqlite::{params, Connection, OptionalExtension, Row};

use creel_core::errors::StorageError;
use creel_core::models::Inspector;

use crate::to_storage_err;

/// Insert an inspector.
pub fn insert_inspector(conn: &Connection, name: &str) -> Result<Inspector, StorageError> {
    conn.execute("INSERT INTO inspectors (name) VALUES (?1)", params![name])
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Inspector {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        active: true,
    })
}

/// Get an inspector by id.
pub fn get_inspector(conn: &Connection, id: i64) -> Result<Option<Inspector>, StorageError> {
    conn.query_row(
        "SELECT id, name, active FROM inspectors WHERE id = ?1",
        params![id],
        parse_inspector_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

fn parse_inspector_row(row: &Row<'_>) -> rusqlite::Result<Inspector> {
    Ok(Inspector {
        id: row.get(0)?,
        name: row.get(1)?,
        active: row.get::<_, i64>(2)? != 0,
    })
}
