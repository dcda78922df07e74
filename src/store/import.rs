//! Loading a JSON export of the external base into the snapshot.
//!
//! Expected document shape:
//!
//! ```json
//! {
//!   "Clients":   [ { "id": "rec…", "fields": { "Name": "Acme" } }, … ],
//!   "Hours Log": [ { "id": "rec…", "fields": { … } }, … ]
//! }
//! ```
//!
//! A malformed document is rejected; individually malformed records are
//! skipped and counted, not fatal.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, params};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub tables: usize,
    pub records: usize,
    pub skipped: usize,
}

pub fn import_base_export(conn: &Connection, path: &Path) -> AppResult<ImportSummary> {
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text)?;

    let Value::Object(tables) = doc else {
        return Err(AppError::InvalidBaseExport(
            "top level must be an object mapping table names to record arrays".to_string(),
        ));
    };

    // A new export replaces the whole snapshot.
    conn.execute("DELETE FROM records", [])?;
    conn.execute("DELETE FROM tables", [])?;

    let mut summary = ImportSummary::default();

    for (table, value) in tables {
        let Value::Array(items) = value else {
            return Err(AppError::InvalidBaseExport(format!(
                "table '{}' must be an array of records",
                table
            )));
        };

        let mut columns: BTreeSet<String> = BTreeSet::new();

        for item in items {
            let Some(obj) = item.as_object() else {
                summary.skipped += 1;
                continue;
            };
            let Some(id) = obj.get("id").and_then(Value::as_str) else {
                summary.skipped += 1;
                continue;
            };

            let fields = match obj.get("fields") {
                Some(Value::Object(map)) => map.clone(),
                None => serde_json::Map::new(),
                Some(_) => {
                    summary.skipped += 1;
                    continue;
                }
            };

            columns.extend(fields.keys().cloned());

            conn.execute(
                "INSERT OR REPLACE INTO records (tbl, record_id, fields)
                 VALUES (?1, ?2, ?3)",
                params![table, id, serde_json::to_string(&fields)?],
            )?;
            summary.records += 1;
        }

        let column_list: Vec<&String> = columns.iter().collect();
        conn.execute(
            "INSERT OR REPLACE INTO tables (name, columns) VALUES (?1, ?2)",
            params![table, serde_json::to_string(&column_list)?],
        )?;
        summary.tables += 1;
    }

    Ok(summary)
}
