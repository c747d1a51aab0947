//! Read-only history queries, always newest first.

use rusqlite::{params, Connection};

use agroml_core::errors::AgromlResult;
use agroml_core::models::PredictionRecord;

use super::prediction_crud::row_to_record;
use crate::to_storage_err;

/// All records owned by one requester, newest first.
pub fn find_by_requester(
    conn: &Connection,
    requester_id: &str,
) -> AgromlResult<Vec<PredictionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, requester_id, category, input, output, status, created_at, updated_at
             FROM predictions WHERE requester_id = ?1
             ORDER BY created_at DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![requester_id], |row| Ok(row_to_record(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(records)
}

/// All records owned by any requester in the set, newest first across the
/// whole result. Empty set yields an empty list without touching SQLite.
pub fn find_by_requester_set(
    conn: &Connection,
    requester_ids: &[String],
) -> AgromlResult<Vec<PredictionRecord>> {
    if requester_ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = (1..=requester_ids.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT id, requester_id, category, input, output, status, created_at, updated_at
         FROM predictions WHERE requester_id IN ({placeholders})
         ORDER BY created_at DESC"
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(requester_ids), |row| {
            Ok(row_to_record(row))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(records)
}
