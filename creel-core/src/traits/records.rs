//! Write-side stores for rounds, violations, and reports.

use chrono::{DateTime, Utc};

use crate::errors::StorageError;
use crate::models::report::ReportSummary;
use crate::models::{NewRound, NewViolation, PatrolRound, Report, ReportType, Violation};

/// Lifecycle operations on patrol rounds.
pub trait RoundStore: Send + Sync {
    /// Start a new round. The round is immediately active.
    fn start_round(&self, round: &NewRound) -> Result<PatrolRound, StorageError>;

    /// Close an active round, stamping its end time.
    /// Fails with [`StorageError::AlreadyClosed`] on a second close.
    fn close_round(
        &self,
        round_id: i64,
        ended_at: Option<DateTime<Utc>>,
    ) -> Result<PatrolRound, StorageError>;

    fn get_round(&self, round_id: i64) -> Result<Option<PatrolRound>, StorageError>;

    /// All rounds, most recently started first.
    fn list_rounds(&self) -> Result<Vec<PatrolRound>, StorageError>;

    /// Number of violations recorded against a round.
    fn violation_count(&self, round_id: i64) -> Result<u64, StorageError>;
}

/// Recording and retrieval of violations.
pub trait ViolationStore: Send + Sync {
    /// Record a violation against an *active* round.
    /// Fails with [`StorageError::RoundClosed`] once the round has ended.
    fn record_violation(&self, violation: &NewViolation) -> Result<Violation, StorageError>;

    fn get_violation(&self, id: i64) -> Result<Option<Violation>, StorageError>;

    /// Violations of one round, oldest first.
    fn list_for_round(&self, round_id: i64) -> Result<Vec<Violation>, StorageError>;
}

/// Persistence and aggregation for periodic reports.
pub trait ReportStore: Send + Sync {
    /// Aggregate all report statistics for the half-open period
    /// `[start, end)`.
    fn summarize_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        top_limit: usize,
    ) -> Result<ReportSummary, StorageError>;

    /// Persist a generated report and return it with its id.
    fn insert_report(
        &self,
        report_type: ReportType,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        summary: &ReportSummary,
        generated_at: DateTime<Utc>,
        created_by: Option<i64>,
    ) -> Result<Report, StorageError>;

    fn get_report(&self, id: i64) -> Result<Option<Report>, StorageError>;

    /// All reports, most recently generated first.
    fn list_reports(&self) -> Result<Vec<Report>, StorageError>;
}
