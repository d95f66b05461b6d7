use serde::{Deserialize, Serialize};

/// A field inspector who runs patrol rounds.
/// Account management (roles, authentication) lives outside this core;
/// only the identity needed for round attribution and reporting is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspector {
    pub id: i64,
    pub name: String,
    /// Whether the inspector may start new rounds.
    pub active: bool,
}
