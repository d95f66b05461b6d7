/// Creel system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sanction code reserved for the formal citation (proces-verbaal).
/// The recidivism engine escalates directly to this sanction at the
/// third offense, overriding the ordinal escalation chain.
pub const CITATION_SANCTION_CODE: &str = "PV";

/// Default lookback window for recidivism checks, in months.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;

/// Number of entries in report top lists (types, inspectors, waters).
pub const DEFAULT_REPORT_TOP_LIMIT: usize = 5;

/// Default size of the read connection pool.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
