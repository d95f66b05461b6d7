//! License-number equivalence.
//!
//! Historical violation records stored the license number inconsistently:
//! some rows kept the exact string including leading zeros ("007"), others
//! a plain numeric spelling (7). Two representations of the same underlying
//! number must count as the same angler, so matching is dual: exact string
//! equality always, numeric equality additionally when the input is purely
//! numeric. This is a deliberate backward-compatibility rule, not a
//! convenience cast.

/// Parse the numeric form of a license number, when it has one.
///
/// Returns `Some` only for non-empty, all-ASCII-digit inputs; "7a" and ""
/// have no numeric form and can only match exactly.
pub fn numeric_form(license: &str) -> Option<i64> {
    if license.is_empty() || !license.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    license.parse::<i64>().ok()
}

/// Whether a stored license number matches the queried one.
///
/// Mirrors the SQL predicate in creel-storage so in-memory collaborators
/// and the database agree on who counts as the same offender.
pub fn matches(stored: &str, query_exact: &str, query_numeric: Option<i64>) -> bool {
    if stored == query_exact {
        return true;
    }
    match (query_numeric, numeric_form(stored)) {
        (Some(q), Some(s)) => q == s,
        _ => false,
    }
}
