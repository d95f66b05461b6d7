use serde::{Deserialize, Serialize};

use crate::constants;

/// Recidivism engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecidivismConfig {
    /// Lookback window applied when the caller does not pass one.
    /// Zero means "no time filter, full history".
    pub default_lookback_months: u32,
}

impl Default for RecidivismConfig {
    fn default() -> Self {
        Self {
            default_lookback_months: constants::DEFAULT_LOOKBACK_MONTHS,
        }
    }
}
