//! # creel-core
//!
//! Foundation crate for the Creel fisheries inspection registry.
//! Defines all domain models, repository traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CreelConfig;
pub use errors::{ConfigError, PolicyError, ReportError, StorageError};
pub use models::{
    PatrolRound, PolicyEvaluation, Report, RoundStatus, Sanction, Violation, ViolationType, Water,
};
