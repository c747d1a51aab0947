//! Schema migrations, gated on `PRAGMA user_version`.

pub mod v001_predictions;
pub mod v002_assignments;

use rusqlite::Connection;

use agroml_core::errors::{AgromlError, AgromlResult, StorageError};

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 2;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> AgromlResult<()> {
    let version = current_version(conn)?;

    if version < 1 {
        v001_predictions::up(conn).map_err(|e| migration_err(1, e))?;
        set_version(conn, 1)?;
        tracing::info!("storage: migrated schema to v1 (predictions)");
    }
    if version < 2 {
        v002_assignments::up(conn).map_err(|e| migration_err(2, e))?;
        set_version(conn, 2)?;
        tracing::info!("storage: migrated schema to v2 (assignments)");
    }
    Ok(())
}

/// Read the current schema version.
pub fn current_version(conn: &Connection) -> AgromlResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| migration_err(0, e))
}

fn set_version(conn: &Connection, version: u32) -> AgromlResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| migration_err(version, e))?;
    Ok(())
}

fn migration_err(version: u32, e: rusqlite::Error) -> AgromlError {
    StorageError::MigrationFailed {
        version,
        reason: e.to_string(),
    }
    .into()
}
