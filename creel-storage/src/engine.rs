//! StorageEngine — owns the ConnectionPool and implements every repository
//! trait from creel-core, plus the reference-data admin used for seeding.

use std::path::Path;

use chrono::{DateTime, Utc};

use creel_core::config::StorageConfig;
use creel_core::constants;
use creel_core::errors::StorageError;
use creel_core::models::report::ReportSummary;
use creel_core::models::{
    Inspector, NewRound, NewViolation, PatrolRound, Report, ReportType, Sanction, Violation,
    ViolationType, Water, WaterKind,
};
use creel_core::traits::{
    HistoryQuery, ReportStore, RoundStore, SanctionCatalog, ViolationHistory, ViolationStore,
    ViolationTypeCatalog,
};

use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine. Owns the connection pool and provides the full
/// catalog, history, round, violation, and report interfaces.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::open_with_pool_size(path, constants::DEFAULT_READ_POOL_SIZE)
    }

    /// [`open`](Self::open) with an explicit read pool size, as resolved
    /// from [`StorageConfig`].
    pub fn open_with_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open_with_pool_size(&config.db_path, config.read_pool_size)
    }

    fn open_with_pool_size(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the writer.
    fn initialize(&self) -> Result<(), StorageError> {
        self.pool
            .writer
            .with_conn_sync(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&rusqlite::Connection) -> Result<T, StorageError>,
    {
        self.pool.read(f)
    }

    // --- Reference-data admin (seeding and catalog management) ---

    /// Add a water to the reference catalog.
    pub fn add_water(
        &self,
        name: &str,
        kind: WaterKind,
        region: Option<&str>,
    ) -> Result<Water, StorageError> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::water_ops::insert_water(conn, name, kind, region, None, None, None)
        })
    }

    /// All waters, ordered by name.
    pub fn list_waters(&self) -> Result<Vec<Water>, StorageError> {
        self.with_reader(crate::queries::water_ops::list_waters)
    }

    /// Add an inspector.
    pub fn add_inspector(&self, name: &str) -> Result<Inspector, StorageError> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::inspector_ops::insert_inspector(conn, name))
    }

    /// Add a sanction to the catalog. Ordinal ranks are unique.
    pub fn add_sanction(
        &self,
        code: Option<&str>,
        description: &str,
        ordinal_rank: u32,
    ) -> Result<Sanction, StorageError> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::catalog_ops::insert_sanction(conn, code, description, ordinal_rank)
        })
    }

    /// Add a violation type to the catalog.
    pub fn add_violation_type(
        &self,
        code: &str,
        description: &str,
        default_sanction_id: Option<i64>,
        repeat_sanction_id: Option<i64>,
    ) -> Result<ViolationType, StorageError> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::catalog_ops::insert_violation_type(
                conn,
                code,
                description,
                None,
                default_sanction_id,
                repeat_sanction_id,
            )
        })
    }
}

impl ViolationTypeCatalog for StorageEngine {
    fn find_by_code(&self, code: &str) -> Result<Option<ViolationType>, StorageError> {
        self.with_reader(|conn| crate::queries::catalog_ops::find_type_by_code(conn, code))
    }
}

impl SanctionCatalog for StorageEngine {
    fn find_by_id(&self, id: i64) -> Result<Option<Sanction>, StorageError> {
        self.with_reader(|conn| crate::queries::catalog_ops::sanction_by_id(conn, id))
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Sanction>, StorageError> {
        self.with_reader(|conn| crate::queries::catalog_ops::sanction_by_code(conn, code))
    }

    fn lightest(&self) -> Result<Option<Sanction>, StorageError> {
        self.with_reader(crate::queries::catalog_ops::lightest_sanction)
    }

    fn next_heavier(&self, than_rank: u32) -> Result<Option<Sanction>, StorageError> {
        self.with_reader(|conn| {
            crate::queries::catalog_ops::next_heavier_sanction(conn, than_rank)
        })
    }
}

impl ViolationHistory for StorageEngine {
    fn count_matching(&self, query: &HistoryQuery) -> Result<u64, StorageError> {
        self.with_reader(|conn| crate::queries::history_ops::count_matching(conn, query))
    }

    fn latest_matching(&self, query: &HistoryQuery) -> Result<Option<Violation>, StorageError> {
        self.with_reader(|conn| crate::queries::history_ops::latest_matching(conn, query))
    }
}

impl RoundStore for StorageEngine {
    fn start_round(&self, round: &NewRound) -> Result<PatrolRound, StorageError> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::round_ops::start_round(conn, round))
    }

    fn close_round(
        &self,
        round_id: i64,
        ended_at: Option<DateTime<Utc>>,
    ) -> Result<PatrolRound, StorageError> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::round_ops::close_round(conn, round_id, ended_at))
    }

    fn get_round(&self, round_id: i64) -> Result<Option<PatrolRound>, StorageError> {
        self.with_reader(|conn| crate::queries::round_ops::get_round(conn, round_id))
    }

    fn list_rounds(&self) -> Result<Vec<PatrolRound>, StorageError> {
        self.with_reader(crate::queries::round_ops::list_rounds)
    }

    fn violation_count(&self, round_id: i64) -> Result<u64, StorageError> {
        self.with_reader(|conn| crate::queries::round_ops::violation_count(conn, round_id))
    }
}

impl ViolationStore for StorageEngine {
    fn record_violation(&self, violation: &NewViolation) -> Result<Violation, StorageError> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::violation_ops::record_violation(conn, violation))
    }

    fn get_violation(&self, id: i64) -> Result<Option<Violation>, StorageError> {
        self.with_reader(|conn| crate::queries::violation_ops::get_violation(conn, id))
    }

    fn list_for_round(&self, round_id: i64) -> Result<Vec<Violation>, StorageError> {
        self.with_reader(|conn| crate::queries::violation_ops::list_for_round(conn, round_id))
    }
}

impl ReportStore for StorageEngine {
    fn summarize_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        top_limit: usize,
    ) -> Result<ReportSummary, StorageError> {
        self.with_reader(|conn| {
            crate::queries::aggregate_ops::summarize_period(conn, start, end, top_limit)
        })
    }

    fn insert_report(
        &self,
        report_type: ReportType,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        summary: &ReportSummary,
        generated_at: DateTime<Utc>,
        created_by: Option<i64>,
    ) -> Result<Report, StorageError> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::report_ops::insert_report(
                conn,
                report_type,
                period_start,
                period_end,
                summary,
                generated_at,
                created_by,
            )
        })
    }

    fn get_report(&self, id: i64) -> Result<Option<Report>, StorageError> {
        self.with_reader(|conn| crate::queries::report_ops::get_report(conn, id))
    }

    fn list_reports(&self) -> Result<Vec<Report>, StorageError> {
        self.with_reader(crate::queries::report_ops::list_reports)
    }
}
