//! # creel-storage
//!
//! SQLite persistence for the Creel inspection registry. Owns the schema,
//! the connection pool, and the repository trait implementations consumed
//! by the recidivism engine and the report generator.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

use chrono::{DateTime, Utc};
use creel_core::errors::StorageError;

pub use engine::StorageEngine;

/// Map any low-level failure message into a [`StorageError::Sqlite`].
pub(crate) fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::Sqlite {
        message: message.into(),
    }
}

/// Canonical timestamp encoding for all tables: RFC 3339 in UTC.
/// Lexicographic comparison of these strings matches chronological order,
/// which the period and lookback range scans rely on.
pub(crate) fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

/// Decode a stored timestamp.
pub(crate) fn parse_ts(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::InvalidTimestamp {
            value: value.to_string(),
            message: e.to_string(),
        })
}
