use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single violation recorded during a patrol round. Immutable once stored;
/// the recidivism engine counts these as historical evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: i64,
    pub round_id: i64,
    pub violation_type_id: i64,
    /// License number of the offending angler, when one was presented.
    /// Stored verbatim: historical records mix "007"-style strings with
    /// plain numeric forms, so leading zeros must survive storage.
    pub license_number: Option<String>,
    /// Measure actually taken in the field, e.g. "warning" or "seizure".
    pub measure_taken: String,
    pub details: Option<String>,
    /// Whether the license document was seized on the spot.
    pub license_seized: bool,
    pub recorded_at: DateTime<Utc>,
}

/// Input for recording a violation against an active round.
#[derive(Debug, Clone)]
pub struct NewViolation {
    pub round_id: i64,
    pub violation_type_id: i64,
    pub license_number: Option<String>,
    pub measure_taken: String,
    pub details: Option<String>,
    pub license_seized: bool,
    /// Defaults to the current time when absent.
    pub recorded_at: Option<DateTime<Utc>>,
}
