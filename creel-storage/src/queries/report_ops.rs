//! Report persistence: insert, get, list. Summaries are stored as JSON.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use creel_core::errors::StorageError;
use creel_core::models::report::ReportSummary;
use creel_core::models::{Report, ReportType};

use crate::{format_ts, parse_ts, to_storage_err};

const REPORT_COLUMNS: &str =
    "id, report_type, period_start, period_end, summary, generated_at, created_by";

/// Persist a generated report.
pub fn insert_report(
    conn: &Connection,
    report_type: ReportType,
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    summary: &ReportSummary,
    generated_at: DateTime<Utc>,
    created_by: Option<i64>,
) -> Result<Report, StorageError> {
    let summary_json =
        serde_json::to_string(summary).map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        "INSERT INTO reports
            (report_type, period_start, period_end, summary, generated_at, created_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            report_type.as_str(),
            format_ts(period_start),
            format_ts(period_end),
            summary_json,
            format_ts(generated_at),
            created_by,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Report {
        id: conn.last_insert_rowid(),
        report_type,
        period_start,
        period_end,
        summary: summary.clone(),
        generated_at,
        created_by,
    })
}

/// Get a report by id.
pub fn get_report(conn: &Connection, id: i64) -> Result<Option<Report>, StorageError> {
    let row = conn
        .query_row(
            &format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1"),
            params![id],
            parse_report_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.transpose()
}

/// All reports, most recently generated first.
pub fn list_reports(conn: &Connection) -> Result<Vec<Report>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports ORDER BY generated_at DESC, id DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], parse_report_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut reports = Vec::new();
    for row in rows {
        reports.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(reports)
}

fn parse_report_row(row: &Row<'_>) -> rusqlite::Result<Result<Report, StorageError>> {
    let id: i64 = row.get(0)?;
    let report_type_raw: String = row.get(1)?;
    let period_start_raw: String = row.get(2)?;
    let period_end_raw: String = row.get(3)?;
    let summary_json: String = row.get(4)?;
    let generated_at_raw: String = row.get(5)?;
    let created_by: Option<i64> = row.get(6)?;

    Ok(decode_report(
        id,
        &report_type_raw,
        &period_start_raw,
        &period_end_raw,
        &summary_json,
        &generated_at_raw,
        created_by,
    ))
}

fn decode_report(
    id: i64,
    report_type_raw: &str,
    period_start_raw: &str,
    period_end_raw: &str,
    summary_json: &str,
    generated_at_raw: &str,
    created_by: Option<i64>,
) -> Result<Report, StorageError> {
    let summary: ReportSummary =
        serde_json::from_str(summary_json).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Report {
        id,
        report_type: ReportType::from_str_lossy(report_type_raw),
        period_start: parse_ts(period_start_raw)?,
        period_end: parse_ts(period_end_raw)?,
        summary,
        generated_at: parse_ts(generated_at_raw)?,
        created_by,
    })
}
