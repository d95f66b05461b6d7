use serde::{Deserialize, Serialize};

use crate::constants;

/// Periodic reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Number of entries in report top lists (types, inspectors, waters).
    pub top_limit: usize,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_limit: constants::DEFAULT_REPORT_TOP_LIMIT,
        }
    }
}
