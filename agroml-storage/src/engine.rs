//! The storage engine: owns the pool, runs migrations on open, and
//! implements the store and assignment-directory traits over it.

use std::path::Path;

use agroml_core::config::StorageConfig;
use agroml_core::errors::AgromlResult;
use agroml_core::models::{Category, PredictionOutput, PredictionRecord, PredictionStatus};
use agroml_core::traits::{IAssignmentDirectory, IPredictionStore};

use crate::migrations::run_migrations;
use crate::pool::ConnectionPool;
use crate::queries::{assignment_ops, dedup, prediction_crud, prediction_query};

/// SQLite-backed prediction store.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// In-memory databases are private to their connection, so reads must
    /// go through the writer there.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(config: &StorageConfig) -> AgromlResult<Self> {
        Self::open_at(&config.db_path, config.read_pool_size)
    }

    /// Open at an explicit path.
    pub fn open_at(path: &Path, read_pool_size: usize) -> AgromlResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        pool.writer.with_conn_sync(run_migrations)?;
        tracing::info!(path = %path.display(), "storage: engine opened");
        Ok(Self {
            pool,
            use_read_pool: true,
        })
    }

    /// Open an in-memory engine (for testing).
    pub fn open_in_memory() -> AgromlResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        pool.writer.with_conn_sync(run_migrations)?;
        Ok(Self {
            pool,
            use_read_pool: false,
        })
    }

    /// Direct pool access, used by tests to manipulate rows underneath
    /// the public API.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    fn with_read_conn<F, T>(&self, f: F) -> AgromlResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> AgromlResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }

    /// Record a supervisor/subordinate assignment. Idempotent.
    pub fn assign(&self, supervisor_id: &str, subordinate_id: &str) -> AgromlResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| assignment_ops::assign(conn, supervisor_id, subordinate_id))
    }

    /// Remove a supervisor/subordinate assignment.
    pub fn unassign(&self, supervisor_id: &str, subordinate_id: &str) -> AgromlResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| assignment_ops::unassign(conn, supervisor_id, subordinate_id))
    }
}

impl IPredictionStore for StorageEngine {
    fn create(&self, record: &PredictionRecord) -> AgromlResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| prediction_crud::insert_record(conn, record))
    }

    fn get(&self, id: &str) -> AgromlResult<Option<PredictionRecord>> {
        self.with_read_conn(|conn| prediction_crud::get_record(conn, id))
    }

    fn refresh_in_window(
        &self,
        requester_id: &str,
        category: Category,
        window: chrono::Duration,
        input: &serde_json::Value,
        output: &PredictionOutput,
        status: PredictionStatus,
    ) -> AgromlResult<Option<PredictionRecord>> {
        self.pool.writer.with_conn_sync(|conn| {
            dedup::refresh_in_window(conn, requester_id, category, window, input, output, status)
        })
    }

    fn find_by_requester(&self, requester_id: &str) -> AgromlResult<Vec<PredictionRecord>> {
        self.with_read_conn(|conn| prediction_query::find_by_requester(conn, requester_id))
    }

    fn find_by_requester_set(
        &self,
        requester_ids: &[String],
    ) -> AgromlResult<Vec<PredictionRecord>> {
        self.with_read_conn(|conn| prediction_query::find_by_requester_set(conn, requester_ids))
    }
}

impl IAssignmentDirectory for StorageEngine {
    fn subordinates_of(&self, supervisor_id: &str) -> AgromlResult<Vec<String>> {
        self.with_read_conn(|conn| assignment_ops::subordinates_of(conn, supervisor_id))
    }
}
