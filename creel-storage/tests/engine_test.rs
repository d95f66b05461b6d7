//! Storage engine integration: file-backed open, migrations, catalog
//! queries, and report persistence.

use chrono::{DateTime, Utc};

use creel_core::models::report::{ReportSummary, ViolationTypeCount};
use creel_core::models::{ReportType, WaterKind};
use creel_core::traits::{ReportStore, SanctionCatalog, ViolationTypeCatalog};
use creel_storage::migrations;
use creel_storage::StorageEngine;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

// ── Open and migrations ───────────────────────────────────────────────────

#[test]
fn file_backed_engine_persists_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("creel.db");

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine.add_water("IJssel", WaterKind::River, Some("East")).unwrap();
    }

    // Reopening runs migrations again; they must be a no-op and the data
    // must still be there.
    let engine = StorageEngine::open(&path).unwrap();
    let waters = engine.list_waters().unwrap();
    assert_eq!(waters.len(), 1);
    assert_eq!(waters[0].name, "IJssel");
    assert_eq!(waters[0].kind, WaterKind::River);

    let version = engine
        .pool()
        .writer
        .with_conn_sync(migrations::current_version)
        .unwrap();
    assert_eq!(version, migrations::SCHEMA_VERSION);
}

#[test]
fn read_pool_observes_committed_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("creel.db");

    let config = creel_core::config::StorageConfig {
        db_path: path,
        read_pool_size: 2,
    };
    let engine = StorageEngine::open_with_config(&config).unwrap();

    // File-backed reads go through the read-only pool; each must see the
    // writer's committed rows. Loop past the pool size to hit every
    // round-robin slot.
    let water = engine.add_water("Loosdrecht", WaterKind::Lake, None).unwrap();
    for _ in 0..4 {
        let waters = engine.list_waters().unwrap();
        assert_eq!(waters.len(), 1);
        assert_eq!(waters[0].id, water.id);
    }
}

#[test]
fn file_backed_engine_runs_in_wal_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("creel.db");
    let engine = StorageEngine::open(&path).unwrap();

    let mode = engine
        .pool()
        .writer
        .with_conn_sync(|conn| {
            conn.query_row("PRAGMA journal_mode", [], |row| row.get::<_, String>(0))
                .map_err(|e| creel_core::errors::StorageError::Sqlite {
                    message: e.to_string(),
                })
        })
        .unwrap();
    assert_eq!(mode, "wal");
}

// ── Catalog queries ───────────────────────────────────────────────────────

#[test]
fn sanction_catalog_orders_by_ordinal_rank() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let citation = engine.add_sanction(Some("PV"), "Formal citation", 9).unwrap();
    let warning = engine.add_sanction(Some("WA"), "Warning", 1).unwrap();
    let interview = engine.add_sanction(None, "Corrective interview", 2).unwrap();

    assert_eq!(engine.lightest().unwrap().unwrap().id, warning.id);
    assert_eq!(
        engine.next_heavier(warning.ordinal_rank).unwrap().unwrap().id,
        interview.id
    );
    assert_eq!(
        engine.next_heavier(interview.ordinal_rank).unwrap().unwrap().id,
        citation.id
    );
    assert!(engine.next_heavier(citation.ordinal_rank).unwrap().is_none());

    assert_eq!(
        SanctionCatalog::find_by_code(&engine, "PV").unwrap().unwrap().id,
        citation.id
    );
    assert!(SanctionCatalog::find_by_code(&engine, "XX").unwrap().is_none());
    assert_eq!(engine.find_by_id(warning.id).unwrap().unwrap().code.as_deref(), Some("WA"));
}

#[test]
fn violation_type_lookup_by_code() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let warning = engine.add_sanction(Some("WA"), "Warning", 1).unwrap();
    let vtype = engine
        .add_violation_type("35", "Fishing with three rods", Some(warning.id), None)
        .unwrap();

    let found = ViolationTypeCatalog::find_by_code(&engine, "35").unwrap().unwrap();
    assert_eq!(found, vtype);
    assert_eq!(found.default_sanction_id, Some(warning.id));
    assert!(ViolationTypeCatalog::find_by_code(&engine, "99").unwrap().is_none());
}

#[test]
fn empty_catalog_has_no_lightest_sanction() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.lightest().unwrap().is_none());
    assert!(engine.next_heavier(0).unwrap().is_none());
}

// ── Report persistence ────────────────────────────────────────────────────

#[test]
fn reports_round_trip_through_the_json_summary_column() {
    let engine = StorageEngine::open_in_memory().unwrap();

    let summary = ReportSummary {
        total_violations: 7,
        total_rounds: 2,
        top_violation_types: vec![ViolationTypeCount {
            code: "10".to_string(),
            description: "Fishing without license".to_string(),
            count: 4,
        }],
        repeat_offender_count: 1,
        licenses_seized_count: 2,
        ..ReportSummary::default()
    };

    let report = engine
        .insert_report(
            ReportType::Weekly,
            ts("2026-03-16T00:00:00Z"),
            ts("2026-03-23T00:00:00Z"),
            &summary,
            ts("2026-03-23T06:00:00Z"),
            Some(3),
        )
        .unwrap();

    let loaded = engine.get_report(report.id).unwrap().unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.report_type, ReportType::Weekly);
    assert_eq!(loaded.summary, summary);
    assert_eq!(loaded.created_by, Some(3));

    assert!(engine.get_report(report.id + 1).unwrap().is_none());
}

#[test]
fn reports_list_newest_first() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let summary = ReportSummary::default();

    let older = engine
        .insert_report(
            ReportType::Daily,
            ts("2026-03-16T00:00:00Z"),
            ts("2026-03-17T00:00:00Z"),
            &summary,
            ts("2026-03-17T06:00:00Z"),
            None,
        )
        .unwrap();
    let newer = engine
        .insert_report(
            ReportType::Daily,
            ts("2026-03-17T00:00:00Z"),
            ts("2026-03-18T00:00:00Z"),
            &summary,
            ts("2026-03-18T06:00:00Z"),
            None,
        )
        .unwrap();

    let reports = engine.list_reports().unwrap();
    assert_eq!(
        reports.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
}
