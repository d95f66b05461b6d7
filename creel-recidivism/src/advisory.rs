//! Advisory message construction.
//!
//! One builder per decision branch. Each message stands alone; the optional
//! fallback note (violation type had no default sanction) is prefixed when
//! present so the inspector sees why the starting point was the lightest
//! sanction in the catalog.

use creel_core::models::Sanction;

/// Prefix `message` with the fallback note, when there is one.
fn with_note(note: Option<&str>, message: String) -> String {
    match note {
        Some(note) => format!("{note} {message}"),
        None => message,
    }
}

/// Note explaining the lightest-sanction fallback.
pub(crate) fn missing_default_note(type_code: &str, lightest: &Sanction) -> String {
    format!(
        "Violation type '{type_code}' has no default sanction; starting from the lightest sanction ({}).",
        lightest.description
    )
}

/// The catalog holds no sanctions at all.
pub(crate) fn empty_catalog() -> String {
    "No action required. No sanctions are configured in the system.".to_string()
}

/// First offense: baseline sanction stands.
pub(crate) fn no_history(baseline: &Sanction, note: Option<&str>) -> String {
    with_note(
        note,
        format!(
            "No recidivism found. Default sanction ({}) recommended.",
            baseline.description
        ),
    )
}

/// Third or later offense: direct escalation to the formal citation.
pub(crate) fn direct_citation(
    count: u64,
    lookback_months: u32,
    citation: &Sanction,
    note: Option<&str>,
) -> String {
    let window = lookback_window(lookback_months);
    with_note(
        note,
        format!(
            "Third offense or later: {count} prior violation(s){window}. \
             Direct escalation to '{}' (formal citation) recommended.",
            citation.description
        ),
    )
}

/// Second offense (or missing citation sanction): ordinal escalation.
pub(crate) fn escalated(
    count: u64,
    lookback_months: u32,
    target: &Sanction,
    note: Option<&str>,
) -> String {
    let window = lookback_window(lookback_months);
    with_note(
        note,
        format!(
            "Recidivism: {count} prior violation(s){window}. \
             Escalation to '{}' recommended.",
            target.description
        ),
    )
}

/// Repeat offense with nothing heavier left in the catalog.
pub(crate) fn ceiling(count: u64, baseline: &Sanction, note: Option<&str>) -> String {
    with_note(
        note,
        format!(
            "Recidivism: {count} prior violation(s). No further escalation possible; \
             heaviest sanction ({}) retained.",
            baseline.description
        ),
    )
}

fn lookback_window(lookback_months: u32) -> String {
    if lookback_months == 0 {
        " across the full history".to_string()
    } else {
        format!(" in the last {lookback_months} months")
    }
}
