//! Violation history lookups for recidivism counting.
//!
//! The offender match is dual on purpose. Historical data stored license
//! numbers inconsistently: some rows carry the exact string including
//! leading zeros ("007"), others a plain numeric spelling ("7"). A row
//! matches when its stored value equals the input verbatim, or when both
//! sides are purely numeric and equal as integers. The numeric leg never
//! fires for non-digit stored values, so "7a" only ever matches "7a".

use rusqlite::{params, Connection, OptionalExtension};

use creel_core::errors::StorageError;
use creel_core::models::Violation;
use creel_core::traits::HistoryQuery;

use super::violation_ops::parse_violation_row;
use crate::{format_ts, to_storage_err};

/// WHERE clause shared by count and latest lookups.
///
/// `?1` violation type id, `?2` exact license string, `?3` optional numeric
/// form, `?4` optional inclusive lookback cutoff (RFC 3339).
const HISTORY_PREDICATE: &str = "
    violation_type_id = ?1
    AND license_number IS NOT NULL
    AND (
        license_number = ?2
        OR (
            ?3 IS NOT NULL
            AND license_number <> ''
            AND license_number NOT GLOB '*[^0-9]*'
            AND CAST(license_number AS INTEGER) = ?3
        )
    )
    AND (?4 IS NULL OR recorded_at >= ?4)";

/// Count prior violations matching the query.
pub fn count_matching(conn: &Connection, query: &HistoryQuery) -> Result<u64, StorageError> {
    let since = query.since.map(format_ts);
    conn.query_row(
        &format!("SELECT COUNT(*) FROM violations WHERE {HISTORY_PREDICATE}"),
        params![
            query.violation_type_id,
            query.license_exact,
            query.license_numeric,
            since,
        ],
        |row| row.get::<_, u64>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// The most recent matching violation, ties broken by highest id.
pub fn latest_matching(
    conn: &Connection,
    query: &HistoryQuery,
) -> Result<Option<Violation>, StorageError> {
    let since = query.since.map(format_ts);
    let row = conn
        .query_row(
            &format!(
                "SELECT id, round_id, violation_type_id, license_number, measure_taken,
                        details, license_seized, recorded_at
                 FROM violations WHERE {HISTORY_PREDICATE}
                 ORDER BY recorded_at DESC, id DESC LIMIT 1"
            ),
            params![
                query.violation_type_id,
                query.license_exact,
                query.license_numeric,
                since,
            ],
            parse_violation_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.transpose()
}
