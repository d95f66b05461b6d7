//! Water reference-data queries.

use rusqlite::{params, Connection, OptionalExtension, Row};

use creel_core::errors::StorageError;
use creel_core::models::{Water, WaterKind};

use crate::to_storage_err;

const WATER_COLUMNS: &str = "id, name, kind, region, description, latitude, longitude";

/// Insert a water. Names are unique.
pub fn insert_water(
    conn: &Connection,
    name: &str,
    kind: WaterKind,
    region: Option<&str>,
    description: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Water, StorageError> {
    conn.execute(
        "INSERT INTO waters (name, kind, region, description, latitude, longitude)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![name, kind.as_str(), region, description, latitude, longitude],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Water {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        kind,
        region: region.map(str::to_string),
        description: description.map(str::to_string),
        latitude,
        longitude,
    })
}

/// Get a water by id.
pub fn get_water(conn: &Connection, id: i64) -> Result<Option<Water>, StorageError> {
    conn.query_row(
        &format!("SELECT {WATER_COLUMNS} FROM waters WHERE id = ?1"),
        params![id],
        parse_water_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// All waters, ordered by name for stable display.
pub fn list_waters(conn: &Connection) -> Result<Vec<Water>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {WATER_COLUMNS} FROM waters ORDER BY name ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], parse_water_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn parse_water_row(row: &Row<'_>) -> rusqlite::Result<Water> {
    let kind: String = row.get(2)?;
    Ok(Water {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: WaterKind::from_str_lossy(&kind),
        region: row.get(3)?,
        description: row.get(4)?,
        latitude: row.get(5)?,
        longitude: row.get(6)?,
    })
}
