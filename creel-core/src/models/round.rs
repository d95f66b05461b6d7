use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A patrol round: one inspector on one water for a bounded time span.
/// Violations are recorded against the round while it is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolRound {
    pub id: i64,
    pub inspector_id: i64,
    pub water_id: i64,
    pub started_at: DateTime<Utc>,
    /// Set when the round is closed.
    pub ended_at: Option<DateTime<Utc>>,
    /// Free-form remarks covering the whole round.
    pub notes: Option<String>,
    pub status: RoundStatus,
}

impl PatrolRound {
    /// Whether violations may still be recorded against this round.
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }
}

/// Two-state round lifecycle. A round starts `Active` and transitions to
/// `Closed` exactly once; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Active,
    Closed,
}

impl RoundStatus {
    /// Stable string form used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }

    /// Parse the storage string form.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Input for starting a new patrol round.
#[derive(Debug, Clone)]
pub struct NewRound {
    pub inspector_id: i64,
    pub water_id: i64,
    /// Defaults to the current time when absent.
    pub started_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
