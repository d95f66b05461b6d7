//! Patrol round lifecycle queries: start, close, list.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use creel_core::errors::StorageError;
use creel_core::models::{NewRound, PatrolRound, RoundStatus};

use crate::{format_ts, parse_ts, to_storage_err};

const ROUND_COLUMNS: &str = "id, inspector_id, water_id, started_at, ended_at, notes, status";

/// Start a new round in the `active` state.
pub fn start_round(conn: &Connection, round: &NewRound) -> Result<PatrolRound, StorageError> {
    let started_at = round.started_at.unwrap_or_else(Utc::now);
    conn.execute(
        "INSERT INTO patrol_rounds (inspector_id, water_id, started_at, notes, status)
         VALUES (?1, ?2, ?3, ?4, 'active')",
        params![
            round.inspector_id,
            round.water_id,
            format_ts(started_at),
            round.notes
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let id = conn.last_insert_rowid();
    tracing::info!(round_id = id, water_id = round.water_id, "patrol round started");

    Ok(PatrolRound {
        id,
        inspector_id: round.inspector_id,
        water_id: round.water_id,
        started_at,
        ended_at: None,
        notes: round.notes.clone(),
        status: RoundStatus::Active,
    })
}

/// Close an active round. A second close is an error, not a no-op: the
/// lifecycle has exactly one Active -> Closed transition.
pub fn close_round(
    conn: &Connection,
    round_id: i64,
    ended_at: Option<DateTime<Utc>>,
) -> Result<PatrolRound, StorageError> {
    let existing = get_round(conn, round_id)?.ok_or(StorageError::NotFound {
        entity: "patrol round",
        id: round_id,
    })?;
    if existing.status == RoundStatus::Closed {
        return Err(StorageError::AlreadyClosed { round_id });
    }

    let ended_at = ended_at.unwrap_or_else(Utc::now);
    conn.execute(
        "UPDATE patrol_rounds SET ended_at = ?1, status = 'closed' WHERE id = ?2",
        params![format_ts(ended_at), round_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tracing::info!(round_id, "patrol round closed");

    Ok(PatrolRound {
        ended_at: Some(ended_at),
        status: RoundStatus::Closed,
        ..existing
    })
}

/// Get a round by id.
pub fn get_round(conn: &Connection, round_id: i64) -> Result<Option<PatrolRound>, StorageError> {
    let row = conn
        .query_row(
            &format!("SELECT {ROUND_COLUMNS} FROM patrol_rounds WHERE id = ?1"),
            params![round_id],
            parse_round_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    row.transpose()
}

/// All rounds, most recently started first.
pub fn list_rounds(conn: &Connection) -> Result<Vec<PatrolRound>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {ROUND_COLUMNS} FROM patrol_rounds ORDER BY started_at DESC, id DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], parse_round_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rounds = Vec::new();
    for row in rows {
        rounds.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(rounds)
}

/// Number of violations recorded against a round.
pub fn violation_count(conn: &Connection, round_id: i64) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM violations WHERE round_id = ?1",
        params![round_id],
        |row| row.get::<_, u64>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Row parser returning a nested result: outer for rusqlite column access,
/// inner for timestamp/status decoding.
fn parse_round_row(row: &Row<'_>) -> rusqlite::Result<Result<PatrolRound, StorageError>> {
    let started_at_raw: String = row.get(3)?;
    let ended_at_raw: Option<String> = row.get(4)?;
    let status_raw: String = row.get(6)?;

    let id: i64 = row.get(0)?;
    let inspector_id: i64 = row.get(1)?;
    let water_id: i64 = row.get(2)?;
    let notes: Option<String> = row.get(5)?;

    Ok(decode_round(
        id,
        inspector_id,
        water_id,
        &started_at_raw,
        ended_at_raw.as_deref(),
        notes,
        &status_raw,
    ))
}

fn decode_round(
    id: i64,
    inspector_id: i64,
    water_id: i64,
    started_at_raw: &str,
    ended_at_raw: Option<&str>,
    notes: Option<String>,
    status_raw: &str,
) -> Result<PatrolRound, StorageError> {
    let started_at = parse_ts(started_at_raw)?;
    let ended_at = ended_at_raw.map(parse_ts).transpose()?;
    let status =
        RoundStatus::from_str_opt(status_raw).ok_or_else(|| StorageError::Sqlite {
            message: format!("unknown round status '{status_raw}' for round {id}"),
        })?;

    Ok(PatrolRound {
        id,
        inspector_id,
        water_id,
        started_at,
        ended_at,
        notes,
        status,
    })
}
