//! Report generation against a real in-memory storage engine.

use chrono::{DateTime, Utc};

use creel_core::errors::ReportError;
use creel_core::models::{NewRound, NewViolation, ReportType, WaterKind};
use creel_core::traits::{ReportStore, RoundStore, ViolationStore};
use creel_reporting::{ReportGenerator, ReportPeriod};
use creel_storage::StorageEngine;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// One closed round with three violations inside March 2026, one outside.
fn seeded_engine() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();

    let water = engine.add_water("Grote Plas", WaterKind::Lake, Some("North")).unwrap();
    let inspector = engine.add_inspector("J. Visser").unwrap();
    let warning = engine.add_sanction(Some("WA"), "Warning", 1).unwrap();
    let no_license = engine
        .add_violation_type("10", "Fishing without license", Some(warning.id), None)
        .unwrap();
    let night_fishing = engine
        .add_violation_type("20", "Night fishing", Some(warning.id), None)
        .unwrap();

    let round = engine
        .start_round(&NewRound {
            inspector_id: inspector.id,
            water_id: water.id,
            started_at: Some(ts("2026-03-10T08:00:00Z")),
            notes: None,
        })
        .unwrap();

    let record = |type_id: i64, license: &str, seized: bool, at: &str| {
        engine
            .record_violation(&NewViolation {
                round_id: round.id,
                violation_type_id: type_id,
                license_number: Some(license.to_string()),
                measure_taken: if seized { "seizure" } else { "warning" }.to_string(),
                details: None,
                license_seized: seized,
                recorded_at: Some(ts(at)),
            })
            .unwrap()
    };

    record(no_license.id, "111", false, "2026-03-10T09:00:00Z");
    record(no_license.id, "111", true, "2026-03-10T10:00:00Z");
    record(night_fishing.id, "222", false, "2026-03-10T11:00:00Z");
    // Outside the March period.
    record(night_fishing.id, "333", false, "2026-04-02T09:00:00Z");

    engine
        .close_round(round.id, Some(ts("2026-04-02T10:00:00Z")))
        .unwrap();
    engine
}

#[test]
fn monthly_report_aggregates_only_the_period() {
    let engine = seeded_engine();
    let generator = ReportGenerator::new(&engine, 5);

    let report = generator
        .generate_for(ReportType::Monthly, ts("2026-03-15T00:00:00Z"), None)
        .unwrap();

    assert_eq!(report.report_type, ReportType::Monthly);
    assert_eq!(report.period_start, ts("2026-03-01T00:00:00Z"));
    assert_eq!(report.period_end, ts("2026-04-01T00:00:00Z"));

    let summary = &report.summary;
    assert_eq!(summary.total_violations, 3);
    // The round closed in April, outside this period.
    assert_eq!(summary.total_rounds, 0);
    assert_eq!(summary.licenses_seized_count, 1);
    // "111" appears twice inside the period.
    assert_eq!(summary.repeat_offender_count, 1);

    assert_eq!(summary.top_violation_types.len(), 2);
    assert_eq!(summary.top_violation_types[0].code, "10");
    assert_eq!(summary.top_violation_types[0].count, 2);

    let warning_measures = summary
        .measure_breakdown
        .iter()
        .find(|m| m.measure == "warning")
        .unwrap();
    assert_eq!(warning_measures.count, 2);
}

#[test]
fn generated_report_is_persisted_and_retrievable() {
    let engine = seeded_engine();
    let generator = ReportGenerator::new(&engine, 5);

    let report = generator
        .generate_for(ReportType::Monthly, ts("2026-03-15T00:00:00Z"), Some(1))
        .unwrap();

    let loaded = engine.get_report(report.id).unwrap().unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.created_by, Some(1));

    let all = engine.list_reports().unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn custom_period_uses_explicit_bounds() {
    let engine = seeded_engine();
    let generator = ReportGenerator::new(&engine, 5);

    let period = ReportPeriod::custom(ts("2026-03-01T00:00:00Z"), ts("2026-05-01T00:00:00Z"));
    let report = generator
        .generate(ReportType::Custom, period, None)
        .unwrap();

    assert_eq!(report.summary.total_violations, 4);
    // The round closed inside this wider period.
    assert_eq!(report.summary.total_rounds, 1);
    assert_eq!(report.summary.top_inspectors.len(), 1);
    assert_eq!(report.summary.top_inspectors[0].name, "J. Visser");
    assert_eq!(report.summary.top_waters[0].name, "Grote Plas");
}

#[test]
fn top_lists_respect_the_limit() {
    let engine = seeded_engine();
    let generator = ReportGenerator::new(&engine, 1);

    let report = generator
        .generate_for(ReportType::Monthly, ts("2026-03-15T00:00:00Z"), None)
        .unwrap();
    assert_eq!(report.summary.top_violation_types.len(), 1);
    assert_eq!(report.summary.top_violation_types[0].code, "10");
}

#[test]
fn empty_period_yields_a_zero_summary() {
    let engine = seeded_engine();
    let generator = ReportGenerator::new(&engine, 5);

    let report = generator
        .generate_for(ReportType::Monthly, ts("2030-01-10T00:00:00Z"), None)
        .unwrap();
    assert_eq!(report.summary.total_violations, 0);
    assert_eq!(report.summary.repeat_offender_count, 0);
    assert!(report.summary.top_violation_types.is_empty());
}

#[test]
fn inverted_period_is_rejected() {
    let engine = seeded_engine();
    let generator = ReportGenerator::new(&engine, 5);

    let period = ReportPeriod::custom(ts("2026-04-01T00:00:00Z"), ts("2026-03-01T00:00:00Z"));
    let err = generator.generate(ReportType::Custom, period, None).unwrap_err();
    assert!(matches!(err, ReportError::InvalidPeriod { .. }));
}
