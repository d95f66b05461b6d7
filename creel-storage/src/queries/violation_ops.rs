//! Violation recording and retrieval. Violations are immutable events:
//! insert and read only, no update or delete paths.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use creel_core::errors::StorageError;
use creel_core::models::{NewViolation, RoundStatus, Violation};

use super::round_ops;
use crate::{format_ts, parse_ts, to_storage_err};

const VIOLATION_COLUMNS: &str =
    "id, round_id, violation_type_id, license_number, measure_taken, details,
     license_seized, recorded_at";

/// Record a violation against an active round.
pub fn record_violation(
    conn: &Connection,
    violation: &NewViolation,
) -> Result<Violation, StorageError> {
    let round = round_ops::get_round(conn, violation.round_id)?.ok_or(StorageError::NotFound {
        entity: "patrol round",
        id: violation.round_id,
    })?;
    if round.status == RoundStatus::Closed {
        return Err(StorageError::RoundClosed {
            round_id: violation.round_id,
        });
    }

    let recorded_at = violation.recorded_at.unwrap_or_else(Utc::now);
    conn.execute(
        "INSERT INTO violations
            (round_id, violation_type_id, license_number, measure_taken, details,
             license_seized, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            violation.round_id,
            violation.violation_type_id,
            violation.license_number,
            violation.measure_taken,
            violation.details,
            violation.license_seized as i64,
            format_ts(recorded_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Violation {
        id: conn.last_insert_rowid(),
        round_id: violation.round_id,
        violation_type_id: violation.violation_type_id,
        license_number: violation.license_number.clone(),
        measure_taken: violation.measure_taken.clone(),
        details: violation.details.clone(),
        license_seized: violation.license_seized,
        recorded_at,
    })
}

/// Get a violation by id.
pub fn get_violation(conn: &Connection, id: i64) -> Result<Option<Violation>, StorageError> {
    let row = conn
        .query_row(
            &format!("SELECT {VIOLATION_COLUMNS} FROM violations WHERE id = ?1"),
            params![id],
            parse_violation_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.transpose()
}

/// Violations of one round, oldest first.
pub fn list_for_round(conn: &Connection, round_id: i64) -> Result<Vec<Violation>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {VIOLATION_COLUMNS} FROM violations
             WHERE round_id = ?1 ORDER BY recorded_at ASC, id ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![round_id], parse_violation_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut violations = Vec::new();
    for row in rows {
        violations.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(violations)
}

pub(crate) fn parse_violation_row(
    row: &Row<'_>,
) -> rusqlite::Result<Result<Violation, StorageError>> {
    let recorded_at_raw: String = row.get(7)?;

    let id: i64 = row.get(0)?;
    let round_id: i64 = row.get(1)?;
    let violation_type_id: i64 = row.get(2)?;
    let license_number: Option<String> = row.get(3)?;
    let measure_taken: String = row.get(4)?;
    let details: Option<String> = row.get(5)?;
    let license_seized: i64 = row.get(6)?;

    Ok(parse_ts(&recorded_at_raw).map(|recorded_at| Violation {
        id,
        round_id,
        violation_type_id,
        license_number,
        measure_taken,
        details,
        license_seized: license_seized != 0,
        recorded_at,
    }))
}
