//! The hours pipeline: fetch → scope → resolve → normalize.

use crate::core::fields::{EMPLOYEE_LINK_FIELDS, first_present};
use crate::core::{normalize, resolve, scope};
use crate::errors::{AppError, AppResult};
use crate::models::hour_entry::HourEntry;
use crate::store::base::RecordStore;
use crate::store::record::RawRecord;
use serde_json::Value;
use std::collections::BTreeSet;

/// Fetch and canonicalize the hour entries of one client.
///
/// The whole hours table is listed and filtered here rather than pushed
/// down as a store-side query: link fields are too loosely typed to filter
/// reliably at the source. Upstream failure surfaces as a single coarse
/// error; the cause goes to stderr, not to the caller.
pub fn fetch_hours<S: RecordStore>(
    store: &S,
    table: &str,
    client_id: &str,
) -> AppResult<Vec<HourEntry>> {
    let records = store.list(table).map_err(|e| {
        eprintln!("⚠️  Upstream fetch failed: {e}");
        AppError::Fetch("hours".to_string())
    })?;

    let scoped: Vec<RawRecord> = records
        .into_iter()
        .filter(|r| scope::links_to_client(r, client_id))
        .filter(|r| !scope::is_internal(r))
        .collect();

    let ids = collect_employee_ids(&scoped);
    let names = resolve::resolve_employee_names(store, &ids);

    Ok(scoped
        .iter()
        .map(|r| normalize::normalize_entry(r, client_id, &names))
        .collect())
}

/// Unique linked employee ids across the scoped records.
fn collect_employee_ids(records: &[RawRecord]) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();

    for record in records {
        match first_present(&record.fields, EMPLOYEE_LINK_FIELDS) {
            Some(Value::Array(list)) => {
                ids.extend(list.iter().filter_map(Value::as_str).map(str::to_string));
            }
            Some(Value::String(id)) => {
                ids.insert(id.clone());
            }
            _ => {}
        }
    }

    ids
}
