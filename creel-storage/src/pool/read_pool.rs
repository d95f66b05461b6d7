//! Pool of read-only connections (never blocked by the writer via WAL).
//!
//! Only file-backed databases get a read pool: separate in-memory
//! connections would be isolated databases, so [`ConnectionPool`] routes
//! in-memory reads through the writer instead of building one.
//!
//! [`ConnectionPool`]: super::ConnectionPool

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use creel_core::errors::StorageError;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Round-robin pool of read-only SQLite connections.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `pool_size` read-only connections to the database file.
    /// The size comes from [`StorageConfig`], which rejects zero.
    ///
    /// [`StorageConfig`]: creel_core::config::StorageConfig
    pub fn open(path: &Path, pool_size: usize) -> Result<Self, StorageError> {
        let mut connections = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let conn = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            apply_read_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Execute a closure on the next connection in round-robin order.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| to_storage_err(format!("read pool lock poisoned: {e}")))?;
        f(&guard)
    }
}
