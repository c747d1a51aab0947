//! The single write connection. All mutation serializes through it, which
//! is what makes the dedup update-or-insert race-free within one engine.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use agroml_core::errors::{AgromlError, AgromlResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded writer. Writes are short; contention stays on the lock,
/// not inside SQLite.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the writer for the given database file.
    pub fn open(path: &Path) -> AgromlResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory writer (for testing).
    pub fn open_in_memory() -> AgromlResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure while holding the writer.
    pub fn with_conn_sync<F, T>(&self, f: F) -> AgromlResult<T>
    where
        F: FnOnce(&Connection) -> AgromlResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            AgromlError::from(StorageError::PoolPoisoned {
                reason: format!("write connection lock poisoned: {e}"),
            })
        })?;
        f(&guard)
    }
}
