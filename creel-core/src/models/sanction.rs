use serde::{Deserialize, Serialize};

/// A disciplinary measure in the sanction catalog.
///
/// `ordinal_rank` defines a strict escalation ordering across the whole
/// catalog: lower rank means a lighter sanction. Ranks are unique, so the
/// "next heavier" sanction is always well defined (or absent at the top).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sanction {
    pub id: i64,
    /// Short internal code, e.g. "WA" for a warning. The code "PV" is
    /// reserved for the formal citation used as a hard escalation target.
    pub code: Option<String>,
    pub description: String,
    pub ordinal_rank: u32,
}
