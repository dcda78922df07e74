//! SQLite-backed snapshot of the external base.
//!
//! Records keep the base's loose typing: the field map is stored as one JSON
//! TEXT column. The set of column names each table had at import time is
//! kept in `tables`, so writing a column the base does not have fails with
//! `UnknownField` exactly like the upstream API would.

use crate::errors::{AppError, AppResult};
use crate::store::base::RecordStore;
use crate::store::record::RawRecord;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde_json::{Map, Value};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Column names the named table had at import time.
    pub fn known_columns(&self, table: &str) -> AppResult<Vec<String>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT columns FROM tables WHERE name = ?1",
                [table],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn table_names(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM tables ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn record_count(&self, table: &str) -> AppResult<i64> {
        let n = self.conn.query_row(
            "SELECT COUNT(*) FROM records WHERE tbl = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(n)
    }
}

fn map_row(row: &Row) -> rusqlite::Result<RawRecord> {
    let id: String = row.get("record_id")?;
    let raw_fields: String = row.get("fields")?;

    let fields: Map<String, Value> = serde_json::from_str(&raw_fields).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(RawRecord { id, fields })
}

impl RecordStore for SqliteStore {
    fn list(&self, table: &str) -> AppResult<Vec<RawRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT record_id, fields FROM records
             WHERE tbl = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([table], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn find(&self, table: &str, id: &str) -> AppResult<RawRecord> {
        let record = self
            .conn
            .query_row(
                "SELECT record_id, fields FROM records
                 WHERE tbl = ?1 AND record_id = ?2",
                [table, id],
                map_row,
            )
            .optional()?;

        record.ok_or_else(|| AppError::RecordNotFound {
            table: table.to_string(),
            id: id.to_string(),
        })
    }

    fn update(&self, table: &str, id: &str, fields: &Map<String, Value>) -> AppResult<()> {
        let columns = self.known_columns(table)?;
        for name in fields.keys() {
            if !columns.iter().any(|c| c == name) {
                return Err(AppError::UnknownField {
                    table: table.to_string(),
                    field: name.clone(),
                });
            }
        }

        // Read-merge-write: the snapshot stores the whole field map as one
        // JSON value.
        let mut record = self.find(table, id)?;
        for (name, value) in fields {
            record.fields.insert(name.clone(), value.clone());
        }

        self.conn.execute(
            "UPDATE records SET fields = ?1 WHERE tbl = ?2 AND record_id = ?3",
            params![
                serde_json::to_string(&record.fields)?,
                table,
                id,
            ],
        )?;
        Ok(())
    }
}
