//! Repository traits at the seam between domain logic and storage.
//! The recidivism engine and report generator only ever see these
//! narrow interfaces, never a concrete database.

pub mod catalog;
pub mod history;
pub mod records;

pub use catalog::{SanctionCatalog, ViolationTypeCatalog};
pub use history::{HistoryQuery, ViolationHistory};
pub use records::{ReportStore, RoundStore, ViolationStore};
