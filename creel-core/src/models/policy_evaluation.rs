use serde::{Deserialize, Serialize};

/// Result of one recidivism evaluation. Ephemeral: produced per invocation,
/// handed to the caller, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEvaluation {
    /// Recommended sanction, or `None` when the catalog holds no sanctions.
    pub recommended_sanction_id: Option<i64>,
    /// True when at least one prior matching violation was found in the
    /// lookback window.
    pub is_recidivist: bool,
    /// Human-readable advisory for the inspector, including any fallback
    /// notes (missing default sanction, escalation ceiling reached).
    pub advisory: String,
    /// Number of prior matching violations counted.
    pub history_count: u64,
}
