//! History lookup semantics at the SQL level: dual license matching and
//! the lookback boundary.

use chrono::{DateTime, Utc};

use creel_core::models::{NewRound, NewViolation, WaterKind};
use creel_core::traits::{HistoryQuery, RoundStore, ViolationHistory, ViolationStore};
use creel_storage::StorageEngine;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn numeric_form(license: &str) -> Option<i64> {
    if license.is_empty() || !license.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    license.parse().ok()
}

fn query(type_id: i64, license: &str, since: Option<DateTime<Utc>>) -> HistoryQuery {
    HistoryQuery {
        violation_type_id: type_id,
        license_exact: license.to_string(),
        license_numeric: numeric_form(license),
        since,
    }
}

struct Fixture {
    engine: StorageEngine,
    round_id: i64,
    type_id: i64,
}

impl Fixture {
    fn new() -> Self {
        let engine = StorageEngine::open_in_memory().unwrap();
        let water = engine.add_water("Ringvaart", WaterKind::Canal, None).unwrap();
        let inspector = engine.add_inspector("A. Bakker").unwrap();
        let warning = engine.add_sanction(Some("WA"), "Warning", 1).unwrap();
        let vtype = engine
            .add_violation_type("10", "Fishing without license", Some(warning.id), None)
            .unwrap();
        let round = engine
            .start_round(&NewRound {
                inspector_id: inspector.id,
                water_id: water.id,
                started_at: Some(ts("2026-01-01T08:00:00Z")),
                notes: None,
            })
            .unwrap();
        Self {
            engine,
            round_id: round.id,
            type_id: vtype.id,
        }
    }

    fn record(&self, license: Option<&str>, at: &str) {
        self.engine
            .record_violation(&NewViolation {
                round_id: self.round_id,
                violation_type_id: self.type_id,
                license_number: license.map(str::to_string),
                measure_taken: "warning".to_string(),
                details: None,
                license_seized: false,
                recorded_at: Some(ts(at)),
            })
            .unwrap();
    }
}

// ── Dual license matching ─────────────────────────────────────────────────

#[test]
fn exact_string_match_counts() {
    let fx = Fixture::new();
    fx.record(Some("AB-12"), "2026-01-02T10:00:00Z");

    let count = fx.engine.count_matching(&query(fx.type_id, "AB-12", None)).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn leading_zero_spellings_match_numerically() {
    let fx = Fixture::new();
    fx.record(Some("007"), "2026-01-02T10:00:00Z");
    fx.record(Some("7"), "2026-01-03T10:00:00Z");

    // Both rows match either spelling of the same number.
    for input in ["7", "007", "0007"] {
        let count = fx.engine.count_matching(&query(fx.type_id, input, None)).unwrap();
        assert_eq!(count, 2, "input {input}");
    }
}

#[test]
fn different_numbers_do_not_match() {
    let fx = Fixture::new();
    fx.record(Some("7"), "2026-01-02T10:00:00Z");

    let count = fx.engine.count_matching(&query(fx.type_id, "8", None)).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn non_numeric_input_matches_only_exactly() {
    let fx = Fixture::new();
    fx.record(Some("7"), "2026-01-02T10:00:00Z");
    fx.record(Some("7a"), "2026-01-03T10:00:00Z");

    let count = fx.engine.count_matching(&query(fx.type_id, "7a", None)).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn non_numeric_stored_values_never_match_numerically() {
    let fx = Fixture::new();
    // SQLite would CAST "7a" to 7; the digit guard must prevent that.
    fx.record(Some("7a"), "2026-01-02T10:00:00Z");
    fx.record(Some(""), "2026-01-03T10:00:00Z");

    let count = fx.engine.count_matching(&query(fx.type_id, "7", None)).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn null_license_rows_are_invisible_to_history() {
    let fx = Fixture::new();
    fx.record(None, "2026-01-02T10:00:00Z");

    let count = fx.engine.count_matching(&query(fx.type_id, "7", None)).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn other_violation_types_do_not_count() {
    let fx = Fixture::new();
    let other = fx
        .engine
        .add_violation_type("20", "Night fishing", None, None)
        .unwrap();
    fx.record(Some("7"), "2026-01-02T10:00:00Z");

    let count = fx.engine.count_matching(&query(other.id, "7", None)).unwrap();
    assert_eq!(count, 0);
}

// ── Lookback boundary ─────────────────────────────────────────────────────

#[test]
fn since_is_inclusive() {
    let fx = Fixture::new();
    fx.record(Some("7"), "2026-01-02T10:00:00Z");

    let at_boundary = fx
        .engine
        .count_matching(&query(fx.type_id, "7", Some(ts("2026-01-02T10:00:00Z"))))
        .unwrap();
    assert_eq!(at_boundary, 1);

    let past_boundary = fx
        .engine
        .count_matching(&query(fx.type_id, "7", Some(ts("2026-01-02T10:00:01Z"))))
        .unwrap();
    assert_eq!(past_boundary, 0);
}

#[test]
fn no_since_means_full_history() {
    let fx = Fixture::new();
    fx.record(Some("7"), "2026-01-02T10:00:00Z");
    fx.record(Some("7"), "2026-01-05T10:00:00Z");

    let count = fx.engine.count_matching(&query(fx.type_id, "7", None)).unwrap();
    assert_eq!(count, 2);
}

// ── Latest record ─────────────────────────────────────────────────────────

#[test]
fn latest_matching_returns_the_newest_row() {
    let fx = Fixture::new();
    fx.record(Some("007"), "2026-01-02T10:00:00Z");
    fx.record(Some("7"), "2026-01-05T10:00:00Z");

    let latest = fx
        .engine
        .latest_matching(&query(fx.type_id, "7", None))
        .unwrap()
        .unwrap();
    assert_eq!(latest.recorded_at, ts("2026-01-05T10:00:00Z"));
    assert_eq!(latest.license_number.as_deref(), Some("7"));
}

#[test]
fn latest_matching_is_none_without_history() {
    let fx = Fixture::new();
    let latest = fx.engine.latest_matching(&query(fx.type_id, "7", None)).unwrap();
    assert!(latest.is_none());
}
