//! Storage-layer errors for SQLite operations.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("connection lock poisoned: {reason}")]
    PoolPoisoned { reason: String },

    #[error("prediction record not found: {id}")]
    RecordNotFound { id: String },
}
