use serde::{Deserialize, Serialize};

/// A catalog entry describing one category of infraction.
/// Immutable reference data; read-only to the policy engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationType {
    pub id: i64,
    /// Official short code, e.g. "10".
    pub code: String,
    pub description: String,
    /// Full legal or explanatory text.
    pub detail_text: Option<String>,
    /// Sanction recommended for a first offense.
    pub default_sanction_id: Option<i64>,
    /// Sanction preferred for repeat offenses of this type, when configured.
    pub repeat_sanction_id: Option<i64>,
}
