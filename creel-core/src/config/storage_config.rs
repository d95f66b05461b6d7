use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// SQLite storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    pub db_path: PathBuf,
    /// Number of read connections in the pool.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("creel.db"),
            read_pool_size: constants::DEFAULT_READ_POOL_SIZE,
        }
    }
}
