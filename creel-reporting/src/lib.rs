//! Periodic report generation.
//!
//! Two pieces: [`ReportPeriod`] turns a report type plus a reference date
//! into concrete half-open period bounds, and [`ReportGenerator`] aggregates
//! a [`creel_core::models::ReportSummary`] over those bounds and persists
//! the result through a [`creel_core::traits::ReportStore`].

pub mod generator;
pub mod period;

pub use generator::ReportGenerator;
pub use period::ReportPeriod;
