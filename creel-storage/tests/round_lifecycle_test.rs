//! Round lifecycle: Active -> Closed exactly once, and violation recording
//! gated on the active state.

use chrono::{DateTime, Utc};

use creel_core::errors::StorageError;
use creel_core::models::{NewRound, NewViolation, RoundStatus, WaterKind};
use creel_core::traits::{RoundStore, ViolationStore};
use creel_storage::StorageEngine;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn seeded() -> (StorageEngine, NewRound) {
    let engine = StorageEngine::open_in_memory().unwrap();
    let water = engine.add_water("Veluwemeer", WaterKind::Lake, None).unwrap();
    let inspector = engine.add_inspector("K. de Groot").unwrap();
    let round = NewRound {
        inspector_id: inspector.id,
        water_id: water.id,
        started_at: Some(ts("2026-05-01T07:00:00Z")),
        notes: Some("morning patrol".to_string()),
    };
    (engine, round)
}

fn new_violation(engine: &StorageEngine, round_id: i64) -> NewViolation {
    let warning = engine.add_sanction(Some("WA"), "Warning", 1).unwrap();
    let vtype = engine
        .add_violation_type("10", "Fishing without license", Some(warning.id), None)
        .unwrap();
    NewViolation {
        round_id,
        violation_type_id: vtype.id,
        license_number: Some("12345".to_string()),
        measure_taken: "warning".to_string(),
        details: None,
        license_seized: false,
        recorded_at: None,
    }
}

#[test]
fn new_round_starts_active() {
    let (engine, new_round) = seeded();
    let round = engine.start_round(&new_round).unwrap();

    assert_eq!(round.status, RoundStatus::Active);
    assert!(round.is_active());
    assert!(round.ended_at.is_none());
    assert_eq!(round.notes.as_deref(), Some("morning patrol"));

    let loaded = engine.get_round(round.id).unwrap().unwrap();
    assert_eq!(loaded, round);
}

#[test]
fn close_stamps_end_time_and_status() {
    let (engine, new_round) = seeded();
    let round = engine.start_round(&new_round).unwrap();

    let ended = ts("2026-05-01T12:00:00Z");
    let closed = engine.close_round(round.id, Some(ended)).unwrap();
    assert_eq!(closed.status, RoundStatus::Closed);
    assert_eq!(closed.ended_at, Some(ended));

    let loaded = engine.get_round(round.id).unwrap().unwrap();
    assert_eq!(loaded.status, RoundStatus::Closed);
    assert_eq!(loaded.ended_at, Some(ended));
}

#[test]
fn second_close_is_rejected() {
    let (engine, new_round) = seeded();
    let round = engine.start_round(&new_round).unwrap();
    engine.close_round(round.id, None).unwrap();

    let err = engine.close_round(round.id, None).unwrap_err();
    assert!(matches!(err, StorageError::AlreadyClosed { round_id } if round_id == round.id));
}

#[test]
fn closing_a_missing_round_is_not_found() {
    let (engine, _) = seeded();
    let err = engine.close_round(999, None).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { id: 999, .. }));
}

#[test]
fn violations_attach_to_active_rounds() {
    let (engine, new_round) = seeded();
    let round = engine.start_round(&new_round).unwrap();
    let violation = new_violation(&engine, round.id);

    let recorded = engine.record_violation(&violation).unwrap();
    assert_eq!(recorded.round_id, round.id);
    assert_eq!(engine.violation_count(round.id).unwrap(), 1);

    let listed = engine.list_for_round(round.id).unwrap();
    assert_eq!(listed, vec![recorded]);
}

#[test]
fn closed_rounds_refuse_new_violations() {
    let (engine, new_round) = seeded();
    let round = engine.start_round(&new_round).unwrap();
    let violation = new_violation(&engine, round.id);
    engine.close_round(round.id, None).unwrap();

    let err = engine.record_violation(&violation).unwrap_err();
    assert!(matches!(err, StorageError::RoundClosed { round_id } if round_id == round.id));
    assert_eq!(engine.violation_count(round.id).unwrap(), 0);
}

#[test]
fn recording_against_a_missing_round_is_not_found() {
    let (engine, _) = seeded();
    let violation = new_violation(&engine, 42);

    let err = engine.record_violation(&violation).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { id: 42, .. }));
}

#[test]
fn rounds_list_newest_first() {
    let (engine, new_round) = seeded();
    let first = engine.start_round(&new_round).unwrap();
    let second = engine
        .start_round(&NewRound {
            started_at: Some(ts("2026-05-02T07:00:00Z")),
            ..new_round
        })
        .unwrap();

    let rounds = engine.list_rounds().unwrap();
    assert_eq!(
        rounds.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
}
