//! Escalation decision table.
//!
//! Three branches on the history count, evaluated in order:
//! count 0 keeps the baseline; count >= 2 escalates straight to the fixed
//! citation sanction when the catalog has one; count 1 — and count >= 2
//! without a citation sanction — takes the next heavier ordinal rank, or
//! keeps the baseline at the top of the ladder.

use creel_core::constants::CITATION_SANCTION_CODE;
use creel_core::errors::StorageError;
use creel_core::models::Sanction;
use creel_core::traits::SanctionCatalog;

/// Outcome of one escalation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Escalation {
    /// No prior history: the baseline sanction stands.
    Baseline,
    /// Third or later offense: direct jump to the formal citation.
    DirectCitation(Sanction),
    /// Repeat offense: next heavier sanction in the catalog ordering.
    NextHeavier(Sanction),
    /// Repeat offense, but the baseline is already the heaviest sanction.
    Ceiling,
}

impl Escalation {
    /// Whether this outcome marks the offender as a recidivist.
    pub fn is_recidivist(&self) -> bool {
        !matches!(self, Self::Baseline)
    }
}

/// Resolve the escalation outcome for a given history count.
///
/// The fall-through from the missing citation sanction to ordinal
/// escalation is intentional: a catalog without "PV" still escalates,
/// just one step at a time.
pub fn resolve(
    sanctions: &dyn SanctionCatalog,
    baseline: &Sanction,
    history_count: u64,
) -> Result<Escalation, StorageError> {
    if history_count == 0 {
        return Ok(Escalation::Baseline);
    }

    if history_count >= 2 {
        if let Some(citation) = sanctions.find_by_code(CITATION_SANCTION_CODE)? {
            return Ok(Escalation::DirectCitation(citation));
        }
    }

    match sanctions.next_heavier(baseline.ordinal_rank)? {
        Some(heavier) => Ok(Escalation::NextHeavier(heavier)),
        None => Ok(Escalation::Ceiling),
    }
}
