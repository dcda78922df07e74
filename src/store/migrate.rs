use crate::errors::AppResult;
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the snapshot tables: `records` holds one row per base record with
/// its JSON field map, `tables` the per-table column registry captured at
/// import time.
fn ensure_snapshot_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            tbl        TEXT NOT NULL,
            record_id  TEXT NOT NULL,
            fields     TEXT NOT NULL DEFAULT '{}',
            UNIQUE(tbl, record_id)
        );

        CREATE INDEX IF NOT EXISTS idx_records_tbl ON records(tbl);

        CREATE TABLE IF NOT EXISTS tables (
            name    TEXT PRIMARY KEY,
            columns TEXT NOT NULL DEFAULT '[]'
        );
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations. Safe to call on every startup; each step is
/// idempotent.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_snapshot_tables(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
