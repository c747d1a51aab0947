//! Time-window refresh: a repeat request inside the window updates the
//! newest matching record in place instead of inserting a second one.

use chrono::{Duration, Utc};
use rusqlite::{params, Connection};

use agroml_core::errors::AgromlResult;
use agroml_core::models::{Category, PredictionOutput, PredictionRecord, PredictionStatus};

use super::prediction_crud::{fmt_ts, row_to_record, OptionalRow};
use crate::to_storage_err;

/// If the requester already has a record of this category newer than
/// `now - window`, overwrite its input, output and status, bump
/// `updated_at`, and return the refreshed record. `created_at` keeps the
/// original value so the window anchors to the first request. Returns
/// `None` when no record falls inside the window.
///
/// The conditional UPDATE targets one row by subselect and runs on the
/// single writer connection, so two concurrent requests for the same
/// requester/category pair cannot both miss the window.
pub fn refresh_in_window(
    conn: &Connection,
    requester_id: &str,
    category: Category,
    window: Duration,
    input: &serde_json::Value,
    output: &PredictionOutput,
    status: PredictionStatus,
) -> AgromlResult<Option<PredictionRecord>> {
    let now = Utc::now();
    let cutoff = fmt_ts(now - window);
    let input_json = serde_json::to_string(input).map_err(|e| to_storage_err(e.to_string()))?;
    let output_json = serde_json::to_string(output).map_err(|e| to_storage_err(e.to_string()))?;

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let changed = tx
        .execute(
            "UPDATE predictions SET input = ?4, output = ?5, status = ?6, updated_at = ?7
             WHERE id = (
                 SELECT id FROM predictions
                 WHERE requester_id = ?1 AND category = ?2 AND created_at > ?3
                 ORDER BY created_at DESC LIMIT 1
             )",
            params![
                requester_id,
                category.as_str(),
                cutoff,
                input_json,
                output_json,
                status.as_str(),
                fmt_ts(now),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        return Ok(None);
    }

    let mut stmt = tx
        .prepare(
            "SELECT id, requester_id, category, input, output, status, created_at, updated_at
             FROM predictions
             WHERE requester_id = ?1 AND category = ?2 AND created_at > ?3
             ORDER BY created_at DESC LIMIT 1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let refreshed = stmt
        .query_row(params![requester_id, category.as_str(), cutoff], |row| {
            Ok(row_to_record(row))
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    drop(stmt);

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;

    match refreshed {
        Some(record) => Ok(Some(record?)),
        None => Ok(None),
    }
}
