use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted periodic report with its aggregated summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_type: ReportType,
    /// Inclusive start of the reporting period.
    pub period_start: DateTime<Utc>,
    /// Exclusive end of the reporting period.
    pub period_end: DateTime<Utc>,
    pub summary: ReportSummary,
    pub generated_at: DateTime<Utc>,
    /// Inspector who triggered generation, when not scheduler-driven.
    pub created_by: Option<i64>,
}

/// Supported reporting periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Custom,
}

impl ReportType {
    /// Stable string form used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Custom => "custom",
        }
    }

    /// Parse the storage string form. Unknown values map to `Custom`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            _ => Self::Custom,
        }
    }
}

/// Aggregated statistics for one reporting period.
/// Stored as a JSON blob in the reports table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReportSummary {
    /// Violations recorded in the period.
    pub total_violations: u64,
    /// Rounds closed in the period.
    pub total_rounds: u64,
    /// Most common violation types, heaviest first, capped.
    pub top_violation_types: Vec<ViolationTypeCount>,
    /// Most active inspectors by closed rounds, capped.
    pub top_inspectors: Vec<InspectorCount>,
    /// Most patrolled waters by closed rounds, capped.
    pub top_waters: Vec<WaterCount>,
    /// Breakdown of measures taken in the field.
    pub measure_breakdown: Vec<MeasureCount>,
    /// License numbers with more than one violation in the period.
    pub repeat_offender_count: u64,
    /// Violations where the license document was seized.
    pub licenses_seized_count: u64,
}

/// Count of violations per violation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationTypeCount {
    pub code: String,
    pub description: String,
    pub count: u64,
}

/// Count of closed rounds per inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorCount {
    pub inspector_id: i64,
    pub name: String,
    pub rounds_count: u64,
}

/// Count of closed rounds per water.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterCount {
    pub water_id: i64,
    pub name: String,
    pub rounds_count: u64,
}

/// Count of violations per measure taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureCount {
    pub measure: String,
    pub count: u64,
}
