//! Report period boundary math.
//!
//! All periods are half-open `[start, end)` in UTC: a record stamped exactly
//! at `end` belongs to the next period. Weeks start on Monday, quarters on
//! Jan/Apr/Jul/Oct 1st.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};

use creel_core::models::ReportType;

/// Concrete bounds of one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
}

impl ReportPeriod {
    /// Bounds of the period containing `for_date`.
    ///
    /// Returns `None` for [`ReportType::Custom`]: custom periods carry their
    /// own explicit bounds and have no implicit containing window.
    pub fn bounds(report_type: ReportType, for_date: DateTime<Utc>) -> Option<Self> {
        let date = for_date.date_naive();
        let start = match report_type {
            ReportType::Daily => date,
            ReportType::Weekly => date - Days::new(u64::from(date.weekday().num_days_from_monday())),
            ReportType::Monthly => first_of_month(date),
            ReportType::Quarterly => first_of_quarter(date),
            ReportType::Custom => return None,
        };
        let end = match report_type {
            ReportType::Daily => start + Days::new(1),
            ReportType::Weekly => start + Days::new(7),
            ReportType::Monthly => start + Months::new(1),
            ReportType::Quarterly => start + Months::new(3),
            ReportType::Custom => unreachable!(),
        };
        Some(Self {
            start: midnight(start),
            end: midnight(end),
        })
    }

    /// Explicit custom bounds, unvalidated; the generator checks ordering.
    pub fn custom(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether an instant falls inside the period.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists.
    date.with_day(1).unwrap_or(date)
}

fn first_of_quarter(date: NaiveDate) -> NaiveDate {
    let quarter_start_month = (date.month0() / 3) * 3 + 1;
    date.with_day(1)
        .and_then(|d| d.with_month(quarter_start_month))
        .unwrap_or(date)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
