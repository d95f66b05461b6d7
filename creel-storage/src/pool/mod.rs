//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use creel_core::errors::StorageError;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// One write connection plus, for file-backed databases, a read pool.
///
/// In-memory databases carry no read pool: every extra in-memory connection
/// would be its own isolated database, so [`read`](Self::read) falls back to
/// the writer there.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let writer = WriteConnection::open(path)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory connection pool (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = WriteConnection::open_in_memory()?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Execute a read-only query on the best available connection: the read
    /// pool when there is one, otherwise the writer.
    pub fn read<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }
}
