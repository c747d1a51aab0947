//! v002: supervisor/subordinate assignments.

use rusqlite::Connection;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS assignments (
            supervisor_id TEXT NOT NULL,
            subordinate_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (supervisor_id, subordinate_id)
        );
        ",
    )
}
