//! Violation history queries for recidivism counting.

use chrono::{DateTime, Utc};

use crate::errors::StorageError;
use crate::models::Violation;

/// Parameters for one history lookup.
///
/// The offender match is deliberately dual: a stored license number matches
/// when it equals `license_exact` as a string, or (for purely numeric input)
/// when it holds the same numeric value as `license_numeric`.
/// Historical records stored this field inconsistently as text or number
/// ("007" vs 7), and both spellings must count as the same angler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub violation_type_id: i64,
    /// Raw input identifier, compared verbatim (leading zeros preserved).
    pub license_exact: String,
    /// Parsed integer form, present only when the input is all digits.
    pub license_numeric: Option<i64>,
    /// Inclusive lower bound on `recorded_at`; `None` means full history.
    pub since: Option<DateTime<Utc>>,
}

/// Read access to prior violations of one angler.
pub trait ViolationHistory: Send + Sync {
    /// Count prior violations matching the query.
    fn count_matching(&self, query: &HistoryQuery) -> Result<u64, StorageError>;

    /// The most recent matching violation, for audit display alongside the
    /// count. Ties broken by highest id.
    fn latest_matching(&self, query: &HistoryQuery) -> Result<Option<Violation>, StorageError>;
}
