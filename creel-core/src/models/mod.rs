//! Domain models for the inspection registry.

pub mod inspector;
pub mod policy_evaluation;
pub mod report;
pub mod round;
pub mod sanction;
pub mod violation;
pub mod violation_type;
pub mod water;

pub use inspector::Inspector;
pub use policy_evaluation::PolicyEvaluation;
pub use report::{Report, ReportSummary, ReportType};
pub use round::{NewRound, PatrolRound, RoundStatus};
pub use sanction::Sanction;
pub use violation::{NewViolation, Violation};
pub use violation_type::ViolationType;
pub use water::{Water, WaterKind};
