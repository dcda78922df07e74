//! Best-effort resolution of linked employee ids to display names.
//!
//! The base does not say which table the `Employees` link points at, so a
//! fixed candidate list is probed in order. The first table that resolves
//! at least one id is adopted for the whole call; ids that still miss stay
//! unmapped and the consumer falls back to the raw id. No retries, no
//! caching across calls.

use crate::core::fields::EMPLOYEE_TABLES;
use crate::store::base::RecordStore;
use crate::store::record::RawRecord;
use std::collections::{BTreeSet, HashMap};

pub fn resolve_employee_names<S: RecordStore>(
    store: &S,
    ids: &BTreeSet<String>,
) -> HashMap<String, String> {
    let mut names = HashMap::new();

    if ids.is_empty() {
        return names;
    }

    for table in EMPLOYEE_TABLES {
        let mut name_field: Option<String> = None;

        for id in ids {
            let Ok(record) = store.find(table, id) else {
                continue;
            };

            // The first record we actually find tells us which field holds
            // the display name in this table.
            let field = name_field
                .get_or_insert_with(|| discover_name_field(&record))
                .clone();

            let display = record
                .fields
                .get(&field)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| id.clone());

            names.insert(id.clone(), display);
        }

        // First table that resolved anything is "the" employee table;
        // do not cross-check the rest.
        if !names.is_empty() {
            break;
        }
    }

    if names.is_empty() {
        eprintln!("⚠️  Could not resolve any employee names; raw ids will be shown instead.");
    }

    names
}

fn discover_name_field(record: &RawRecord) -> String {
    record
        .fields
        .keys()
        .find(|k| k.to_lowercase().contains("name"))
        .cloned()
        .unwrap_or_else(|| "Name".to_string())
}
