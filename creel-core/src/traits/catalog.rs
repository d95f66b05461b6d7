//! Read-only catalog lookups consumed by the recidivism engine.

use crate::errors::StorageError;
use crate::models::{Sanction, ViolationType};

/// Lookup into the violation-type catalog.
pub trait ViolationTypeCatalog: Send + Sync {
    /// Resolve a violation type by its official short code.
    fn find_by_code(&self, code: &str) -> Result<Option<ViolationType>, StorageError>;
}

/// Lookup into the ordered sanction catalog.
///
/// The catalog defines a strict severity ordering via unique ordinal ranks;
/// these queries are the only ordering facts the engine relies on.
pub trait SanctionCatalog: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<Sanction>, StorageError>;

    /// Resolve a sanction by its internal code (e.g. "PV").
    fn find_by_code(&self, code: &str) -> Result<Option<Sanction>, StorageError>;

    /// The globally lightest sanction (lowest ordinal rank), if any exist.
    fn lightest(&self) -> Result<Option<Sanction>, StorageError>;

    /// The next heavier sanction: smallest ordinal rank strictly greater
    /// than `than_rank`, or `None` when `than_rank` is already the top.
    fn next_heavier(&self, than_rank: u32) -> Result<Option<Sanction>, StorageError>;
}
