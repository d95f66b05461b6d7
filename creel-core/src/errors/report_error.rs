//! Reporting errors.

use super::storage_error::StorageError;

/// Errors that can occur while generating a periodic report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid report period: start {start} is not before end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("storage failure during report aggregation: {0}")]
    Storage(#[from] StorageError),
}
