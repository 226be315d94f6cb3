#![forbid(unsafe_code)]

use crate::StoreError;
use rusqlite::{Connection, params};

pub(crate) const SCHEMA_VERSION: &str = "v1";

// `student_groups` rows are deleted only after member references are nulled;
// the foreign key has no ON DELETE action.
const SCHEMA_SQL: &str = r#"
PRAGMA journal_mode=WAL;
PRAGMA synchronous=NORMAL;

CREATE TABLE IF NOT EXISTS meta (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS student_groups (
  group_id INTEGER PRIMARY KEY AUTOINCREMENT,
  avg_sgpa REAL NOT NULL,
  status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'blacklisted'))
);

CREATE TABLE IF NOT EXISTS students (
  roll_no INTEGER PRIMARY KEY AUTOINCREMENT,
  first_name TEXT NOT NULL,
  last_name TEXT NOT NULL,
  sgpa REAL NOT NULL,
  status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'blacklisted')),
  group_id INTEGER REFERENCES student_groups(group_id)
);

CREATE INDEX IF NOT EXISTS idx_students_status_sgpa ON students(status, sgpa DESC);
CREATE INDEX IF NOT EXISTS idx_students_group ON students(group_id);
"#;

pub(crate) fn install(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO meta(key, value) VALUES (?1, ?2)",
        params!["schema_version", SCHEMA_VERSION],
    )?;
    Ok(())
}
