//! Error handling for Creel.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod policy_error;
pub mod report_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use policy_error::PolicyError;
pub use report_error::ReportError;
pub use storage_error::StorageError;
