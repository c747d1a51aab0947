//! Insert and get for prediction records, plus row/timestamp helpers
//! shared by the other query modules.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use agroml_core::errors::AgromlResult;
use agroml_core::models::{Category, PredictionOutput, PredictionRecord, PredictionStatus};

use crate::to_storage_err;

/// Timestamps are stored as fixed-width RFC 3339 (microseconds, Z suffix)
/// so that string comparison orders them correctly.
pub(crate) fn fmt_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_ts(s: &str) -> AgromlResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{s}': {e}")))
}

/// Insert a new prediction record.
pub fn insert_record(conn: &Connection, record: &PredictionRecord) -> AgromlResult<()> {
    let input_json =
        serde_json::to_string(&record.input).map_err(|e| to_storage_err(e.to_string()))?;
    let output_json =
        serde_json::to_string(&record.output).map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        "INSERT INTO predictions (
            id, requester_id, category, input, output, status, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.id,
            record.requester_id,
            record.category.as_str(),
            input_json,
            output_json,
            record.status.as_str(),
            fmt_ts(record.created_at),
            fmt_ts(record.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a single record by id.
pub fn get_record(conn: &Connection, id: &str) -> AgromlResult<Option<PredictionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, requester_id, category, input, output, status, created_at, updated_at
             FROM predictions WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], |row| Ok(row_to_record(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(record) => Ok(Some(record?)),
        None => Ok(None),
    }
}

/// Parse a row from the predictions table.
pub(crate) fn row_to_record(row: &rusqlite::Row<'_>) -> AgromlResult<PredictionRecord> {
    let category_str: String = row.get(2).map_err(|e| to_storage_err(e.to_string()))?;
    let input_json: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let output_json: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let status_str: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    let created_str: String = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_str: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;

    let category = Category::parse(&category_str)
        .ok_or_else(|| to_storage_err(format!("unknown category '{category_str}'")))?;
    let status = PredictionStatus::parse(&status_str)
        .ok_or_else(|| to_storage_err(format!("unknown status '{status_str}'")))?;
    let input: serde_json::Value = serde_json::from_str(&input_json)
        .map_err(|e| to_storage_err(format!("parse input: {e}")))?;
    let output: PredictionOutput = serde_json::from_str(&output_json)
        .map_err(|e| to_storage_err(format!("parse output: {e}")))?;

    Ok(PredictionRecord {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        requester_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        category,
        input,
        output,
        status,
        created_at: parse_ts(&created_str)?,
        updated_at: parse_ts(&updated_str)?,
    })
}

/// Helper trait to make `query_row` return `Option` on not-found.
pub(crate) trait OptionalRow<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalRow<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
