/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("patrol round {round_id} is closed; violations can only be recorded on an active round")]
    RoundClosed { round_id: i64 },

    #[error("patrol round {round_id} is already closed")]
    AlreadyClosed { round_id: i64 },

    #[error("invalid stored timestamp '{value}': {message}")]
    InvalidTimestamp { value: String, message: String },
}
