//! Report generation over a [`ReportStore`].

use chrono::{DateTime, Utc};

use creel_core::errors::ReportError;
use creel_core::models::{Report, ReportType};
use creel_core::traits::ReportStore;

use crate::period::ReportPeriod;

/// Aggregates a period summary and persists it as a [`Report`].
///
/// Delivery (mail, PDF) is a separate layer; the generator only produces
/// and stores the numbers.
pub struct ReportGenerator<'a> {
    store: &'a dyn ReportStore,
    top_limit: usize,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(store: &'a dyn ReportStore, top_limit: usize) -> Self {
        Self { store, top_limit }
    }

    /// Generate and persist a report for an explicit period.
    ///
    /// The period must be non-empty: `start < end`.
    pub fn generate(
        &self,
        report_type: ReportType,
        period: ReportPeriod,
        created_by: Option<i64>,
    ) -> Result<Report, ReportError> {
        if period.start >= period.end {
            return Err(ReportError::InvalidPeriod {
                start: period.start.to_rfc3339(),
                end: period.end.to_rfc3339(),
            });
        }

        tracing::info!(
            report_type = report_type.as_str(),
            period_start = %period.start,
            period_end = %period.end,
            "generating report"
        );

        let summary = self
            .store
            .summarize_period(period.start, period.end, self.top_limit)?;
        let report = self.store.insert_report(
            report_type,
            period.start,
            period.end,
            &summary,
            Utc::now(),
            created_by,
        )?;

        tracing::info!(
            report_id = report.id,
            total_violations = report.summary.total_violations,
            total_rounds = report.summary.total_rounds,
            "report persisted"
        );
        Ok(report)
    }

    /// Generate the standard report for the period containing `for_date`.
    ///
    /// [`ReportType::Custom`] has no implicit period and is rejected as an
    /// empty one; use [`generate`](Self::generate) with explicit bounds.
    pub fn generate_for(
        &self,
        report_type: ReportType,
        for_date: DateTime<Utc>,
        created_by: Option<i64>,
    ) -> Result<Report, ReportError> {
        let period = ReportPeriod::bounds(report_type, for_date).unwrap_or(ReportPeriod {
            start: for_date,
            end: for_date,
        });
        self.generate(report_type, period, created_by)
    }
}
