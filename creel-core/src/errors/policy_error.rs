//! Errors surfaced by the recidivism policy engine.

use super::storage_error::StorageError;

/// Errors that can occur during a recidivism evaluation.
///
/// An empty sanction catalog is deliberately *not* an error: the engine
/// returns a degraded successful result with no recommendation instead.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The violation type code does not resolve to a catalog entry.
    /// Client-facing, never retried.
    #[error("unknown violation type code '{code}'")]
    UnknownViolationType { code: String },

    /// A read against one of the collaborators failed. Surfaced to the
    /// caller unchanged; the whole evaluation may be retried.
    #[error("dependency failure during policy evaluation: {0}")]
    Dependency(#[from] StorageError),
}
