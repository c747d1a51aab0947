//! Supervisor/subordinate assignment rows.

use chrono::Utc;
use rusqlite::{params, Connection};

use agroml_core::errors::AgromlResult;

use super::prediction_crud::fmt_ts;
use crate::to_storage_err;

/// Record that `supervisor_id` oversees `subordinate_id`. Idempotent.
pub fn assign(conn: &Connection, supervisor_id: &str, subordinate_id: &str) -> AgromlResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO assignments (supervisor_id, subordinate_id, created_at)
         VALUES (?1, ?2, ?3)",
        params![supervisor_id, subordinate_id, fmt_ts(Utc::now())],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Remove an assignment. Removing a missing pair is not an error.
pub fn unassign(conn: &Connection, supervisor_id: &str, subordinate_id: &str) -> AgromlResult<()> {
    conn.execute(
        "DELETE FROM assignments WHERE supervisor_id = ?1 AND subordinate_id = ?2",
        params![supervisor_id, subordinate_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Ids of everyone assigned under this supervisor, sorted for stable output.
pub fn subordinates_of(conn: &Connection, supervisor_id: &str) -> AgromlResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT subordinate_id FROM assignments
             WHERE supervisor_id = ?1 ORDER BY subordinate_id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![supervisor_id], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut ids = Vec::new();
    for row in rows {
        ids.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(ids)
}
