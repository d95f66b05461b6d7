//! Report aggregation over one half-open period `[start, end)`.
//!
//! Violations are bucketed by `recorded_at`; rounds count only when they
//! were closed inside the period (bucketed by `ended_at`).

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use creel_core::errors::StorageError;
use creel_core::models::report::{
    InspectorCount, MeasureCount, ReportSummary, ViolationTypeCount, WaterCount,
};

use crate::{format_ts, to_storage_err};

/// Aggregate all report statistics for the period.
pub fn summarize_period(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    top_limit: usize,
) -> Result<ReportSummary, StorageError> {
    let start = format_ts(start);
    let end = format_ts(end);

    Ok(ReportSummary {
        total_violations: total_violations(conn, &start, &end)?,
        total_rounds: total_rounds(conn, &start, &end)?,
        top_violation_types: top_violation_types(conn, &start, &end, top_limit)?,
        top_inspectors: top_inspectors(conn, &start, &end, top_limit)?,
        top_waters: top_waters(conn, &start, &end, top_limit)?,
        measure_breakdown: measure_breakdown(conn, &start, &end)?,
        repeat_offender_count: repeat_offender_count(conn, &start, &end)?,
        licenses_seized_count: licenses_seized_count(conn, &start, &end)?,
    })
}

fn total_violations(conn: &Connection, start: &str, end: &str) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM violations WHERE recorded_at >= ?1 AND recorded_at < ?2",
        params![start, end],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn total_rounds(conn: &Connection, start: &str, end: &str) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM patrol_rounds
         WHERE status = 'closed' AND ended_at >= ?1 AND ended_at < ?2",
        params![start, end],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn top_violation_types(
    conn: &Connection,
    start: &str,
    end: &str,
    limit: usize,
) -> Result<Vec<ViolationTypeCount>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT t.code, t.description, COUNT(*) AS n
             FROM violations v
             JOIN violation_types t ON t.id = v.violation_type_id
             WHERE v.recorded_at >= ?1 AND v.recorded_at < ?2
             GROUP BY t.id, t.code, t.description
             ORDER BY n DESC, t.code ASC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![start, end, limit as i64], |row| {
            Ok(ViolationTypeCount {
                code: row.get(0)?,
                description: row.get(1)?,
                count: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn top_inspectors(
    conn: &Connection,
    start: &str,
    end: &str,
    limit: usize,
) -> Result<Vec<InspectorCount>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT i.id, i.name, COUNT(*) AS n
             FROM patrol_rounds r
             JOIN inspectors i ON i.id = r.inspector_id
             WHERE r.status = 'closed' AND r.ended_at >= ?1 AND r.ended_at < ?2
             GROUP BY i.id, i.name
             ORDER BY n DESC, i.name ASC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![start, end, limit as i64], |row| {
            Ok(InspectorCount {
                inspector_id: row.get(0)?,
                name: row.get(1)?,
                rounds_count: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn top_waters(
    conn: &Connection,
    start: &str,
    end: &str,
    limit: usize,
) -> Result<Vec<WaterCount>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT w.id, w.name, COUNT(*) AS n
             FROM patrol_rounds r
             JOIN waters w ON w.id = r.water_id
             WHERE r.status = 'closed' AND r.ended_at >= ?1 AND r.ended_at < ?2
             GROUP BY w.id, w.name
             ORDER BY n DESC, w.name ASC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![start, end, limit as i64], |row| {
            Ok(WaterCount {
                water_id: row.get(0)?,
                name: row.get(1)?,
                rounds_count: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn measure_breakdown(
    conn: &Connection,
    start: &str,
    end: &str,
) -> Result<Vec<MeasureCount>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT measure_taken, COUNT(*) AS n
             FROM violations
             WHERE recorded_at >= ?1 AND recorded_at < ?2
             GROUP BY measure_taken
             ORDER BY n DESC, measure_taken ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![start, end], |row| {
            Ok(MeasureCount {
                measure: row.get(0)?,
                count: row.get(1)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// License numbers with more than one violation inside the period.
fn repeat_offender_count(conn: &Connection, start: &str, end: &str) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM (
             SELECT license_number
             FROM violations
             WHERE recorded_at >= ?1 AND recorded_at < ?2
               AND license_number IS NOT NULL
             GROUP BY license_number
             HAVING COUNT(*) > 1
         )",
        params![start, end],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn licenses_seized_count(conn: &Connection, start: &str, end: &str) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM violations
         WHERE recorded_at >= ?1 AND recorded_at < ?2 AND license_seized = 1",
        params![start, end],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
