//! v001: the predictions table and its dedup-lookup index.

use rusqlite::Connection;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS predictions (
            id TEXT PRIMARY KEY,
            requester_id TEXT NOT NULL,
            category TEXT NOT NULL,
            input TEXT NOT NULL,
            output TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_predictions_window
            ON predictions (requester_id, category, created_at DESC);

        CREATE INDEX IF NOT EXISTS idx_predictions_requester
            ON predictions (requester_id, created_at DESC);
        ",
    )
}
