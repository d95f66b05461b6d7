//! The recidivism evaluation itself.

use chrono::{DateTime, Months, Utc};

use creel_core::errors::PolicyError;
use creel_core::models::PolicyEvaluation;
use creel_core::traits::{HistoryQuery, SanctionCatalog, ViolationHistory, ViolationTypeCatalog};

use crate::{advisory, escalation, license};
use escalation::Escalation;

/// Stateless policy engine over the three read-only collaborators.
///
/// Safe to share across concurrent requests: every call re-resolves catalog
/// state and nothing is cached or mutated between invocations.
pub struct RecidivismEngine<'a> {
    types: &'a dyn ViolationTypeCatalog,
    sanctions: &'a dyn SanctionCatalog,
    history: &'a dyn ViolationHistory,
}

impl<'a> RecidivismEngine<'a> {
    pub fn new(
        types: &'a dyn ViolationTypeCatalog,
        sanctions: &'a dyn SanctionCatalog,
        history: &'a dyn ViolationHistory,
    ) -> Self {
        Self {
            types,
            sanctions,
            history,
        }
    }

    /// Evaluate an offender against the current catalog and history.
    ///
    /// `lookback_months == 0` means "no time filter, full history". An empty
    /// license number skips the history lookup entirely: no identity, no
    /// history, first-offense path.
    pub fn evaluate(
        &self,
        license_number: &str,
        violation_type_code: &str,
        lookback_months: u32,
    ) -> Result<PolicyEvaluation, PolicyError> {
        self.evaluate_at(Utc::now(), license_number, violation_type_code, lookback_months)
    }

    /// [`evaluate`](Self::evaluate) with an explicit "now" for the lookback
    /// cutoff, so callers and tests control the clock.
    pub fn evaluate_at(
        &self,
        now: DateTime<Utc>,
        license_number: &str,
        violation_type_code: &str,
        lookback_months: u32,
    ) -> Result<PolicyEvaluation, PolicyError> {
        let violation_type = self
            .types
            .find_by_code(violation_type_code)?
            .ok_or_else(|| PolicyError::UnknownViolationType {
                code: violation_type_code.to_string(),
            })?;

        // Baseline: the type's default sanction, else the lightest in the
        // catalog (noted in the advisory), else a degraded empty-catalog
        // result. A dangling default id is treated the same as no default.
        let default_sanction = match violation_type.default_sanction_id {
            Some(id) => self.sanctions.find_by_id(id)?,
            None => None,
        };
        let (baseline, fallback_note) = match default_sanction {
            Some(sanction) => (sanction, None),
            None => match self.sanctions.lightest()? {
                Some(lightest) => {
                    let note = advisory::missing_default_note(violation_type_code, &lightest);
                    (lightest, Some(note))
                }
                None => {
                    return Ok(PolicyEvaluation {
                        recommended_sanction_id: None,
                        is_recidivist: false,
                        advisory: advisory::empty_catalog(),
                        history_count: 0,
                    });
                }
            },
        };

        let since = if lookback_months == 0 {
            None
        } else {
            Some(
                now.checked_sub_months(Months::new(lookback_months))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
            )
        };

        let history_count = if license_number.is_empty() {
            0
        } else {
            let query = HistoryQuery {
                violation_type_id: violation_type.id,
                license_exact: license_number.to_string(),
                license_numeric: license::numeric_form(license_number),
                since,
            };
            tracing::info!(
                license_number,
                violation_type_code,
                lookback_months,
                since = since.map(|s| s.to_rfc3339()),
                "recidivism history lookup"
            );
            let count = self.history.count_matching(&query)?;
            tracing::info!(license_number, history_count = count, "recidivism history counted");
            count
        };

        let note = fallback_note.as_deref();
        let outcome = escalation::resolve(self.sanctions, &baseline, history_count)?;
        let (recommended_sanction_id, advisory) = match &outcome {
            Escalation::Baseline => (
                Some(baseline.id),
                advisory::no_history(&baseline, note),
            ),
            Escalation::DirectCitation(citation) => (
                Some(citation.id),
                advisory::direct_citation(history_count, lookback_months, citation, note),
            ),
            Escalation::NextHeavier(target) => (
                Some(target.id),
                advisory::escalated(history_count, lookback_months, target, note),
            ),
            Escalation::Ceiling => (
                Some(baseline.id),
                advisory::ceiling(history_count, &baseline, note),
            ),
        };

        Ok(PolicyEvaluation {
            recommended_sanction_id,
            is_recidivist: outcome.is_recidivist(),
            advisory,
            history_count,
        })
    }
}
