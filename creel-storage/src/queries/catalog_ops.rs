//! Violation-type and sanction catalog queries.
//!
//! The catalogs are low-frequency reference data. Inserts exist for seeding
//! and catalog management; the policy engine only ever reads.

use rusqlite::{params, Connection, OptionalExtension, Row};

use creel_core::errors::StorageError;
use creel_core::models::{Sanction, ViolationType};

use crate::to_storage_err;

/// Insert a sanction. `ordinal_rank` must be unique across the catalog.
pub fn insert_sanction(
    conn: &Connection,
    code: Option<&str>,
    description: &str,
    ordinal_rank: u32,
) -> Result<Sanction, StorageError> {
    conn.execute(
        "INSERT INTO sanctions (code, description, ordinal_rank) VALUES (?1, ?2, ?3)",
        params![code, description, ordinal_rank],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Sanction {
        id: conn.last_insert_rowid(),
        code: code.map(str::to_string),
        description: description.to_string(),
        ordinal_rank,
    })
}

/// Insert a violation type.
pub fn insert_violation_type(
    conn: &Connection,
    code: &str,
    description: &str,
    detail_text: Option<&str>,
    default_sanction_id: Option<i64>,
    repeat_sanction_id: Option<i64>,
) -> Result<ViolationType, StorageError> {
    conn.execute(
        "INSERT INTO violation_types
            (code, description, detail_text, default_sanction_id, repeat_sanction_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            code,
            description,
            detail_text,
            default_sanction_id,
            repeat_sanction_id
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(ViolationType {
        id: conn.last_insert_rowid(),
        code: code.to_string(),
        description: description.to_string(),
        detail_text: detail_text.map(str::to_string),
        default_sanction_id,
        repeat_sanction_id,
    })
}

const TYPE_COLUMNS: &str =
    "id, code, description, detail_text, default_sanction_id, repeat_sanction_id";

const SANCTION_COLUMNS: &str = "id, code, description, ordinal_rank";

/// Resolve a violation type by its official code.
pub fn find_type_by_code(
    conn: &Connection,
    code: &str,
) -> Result<Option<ViolationType>, StorageError> {
    conn.query_row(
        &format!("SELECT {TYPE_COLUMNS} FROM violation_types WHERE code = ?1"),
        params![code],
        parse_type_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Resolve a sanction by id.
pub fn sanction_by_id(conn: &Connection, id: i64) -> Result<Option<Sanction>, StorageError> {
    conn.query_row(
        &format!("SELECT {SANCTION_COLUMNS} FROM sanctions WHERE id = ?1"),
        params![id],
        parse_sanction_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Resolve a sanction by its internal code.
pub fn sanction_by_code(conn: &Connection, code: &str) -> Result<Option<Sanction>, StorageError> {
    conn.query_row(
        &format!("SELECT {SANCTION_COLUMNS} FROM sanctions WHERE code = ?1"),
        params![code],
        parse_sanction_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// The sanction with the lowest ordinal rank in the whole catalog.
pub fn lightest_sanction(conn: &Connection) -> Result<Option<Sanction>, StorageError> {
    conn.query_row(
        &format!("SELECT {SANCTION_COLUMNS} FROM sanctions ORDER BY ordinal_rank ASC LIMIT 1"),
        [],
        parse_sanction_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// The sanction with the smallest ordinal rank strictly above `than_rank`.
pub fn next_heavier_sanction(
    conn: &Connection,
    than_rank: u32,
) -> Result<Option<Sanction>, StorageError> {
    conn.query_row(
        &format!(
            "SELECT {SANCTION_COLUMNS} FROM sanctions
             WHERE ordinal_rank > ?1
             ORDER BY ordinal_rank ASC LIMIT 1"
        ),
        params![than_rank],
        parse_sanction_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

fn parse_type_row(row: &Row<'_>) -> rusqlite::Result<ViolationType> {
    Ok(ViolationType {
        id: row.get(0)?,
        code: row.get(1)?,
        description: row.get(2)?,
        detail_text: row.get(3)?,
        default_sanction_id: row.get(4)?,
        repeat_sanction_id: row.get(5)?,
    })
}

fn parse_sanction_row(row: &Row<'_>) -> rusqlite::Result<Sanction> {
    Ok(Sanction {
        id: row.get(0)?,
        code: row.get(1)?,
        description: row.get(2)?,
        ordinal_rank: row.get(3)?,
    })
}
