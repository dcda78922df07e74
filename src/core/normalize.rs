//! Canonicalization of raw hour records.
//!
//! Normalization is a total function: every malformed or missing field
//! degrades to a default, it never fails. It is also idempotent — an entry
//! rendered back to raw fields and normalized again is identical.

use crate::core::fields::{
    BILLABLE_FIELDS, CONSULTANT_FIELDS, DATE_FIELDS, DESCRIPTION_FIELDS, EMPLOYEE_LINK_FIELDS,
    HOURS_FIELDS, INTERNAL_FIELDS, first_present, truthy_flag,
};
use crate::models::billing_status::BillingStatus;
use crate::models::hour_entry::HourEntry;
use crate::store::record::RawRecord;
use crate::utils::date;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

/// Build one canonical `HourEntry` from a raw record.
///
/// `names` is the (possibly partial) employee id → display name map; ids it
/// does not cover keep the raw id as the display name.
pub fn normalize_entry(
    record: &RawRecord,
    client_id: &str,
    names: &HashMap<String, String>,
) -> HourEntry {
    let entry_date = first_present(&record.fields, DATE_FIELDS)
        .map(coerce_date)
        .unwrap_or_else(date::today);

    let consultants = consultant_names(record, names);

    let description = first_present(&record.fields, DESCRIPTION_FIELDS)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    // "No" on the billable-like field always wins: truthy_flag maps it to
    // Some(false), and everything that is not an explicit yes lands on the
    // non-billable side.
    let billable = first_present(&record.fields, BILLABLE_FIELDS)
        .and_then(truthy_flag)
        .unwrap_or(false);

    let hours = first_present(&record.fields, HOURS_FIELDS)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .max(0.0);

    let internal = first_present(&record.fields, INTERNAL_FIELDS)
        .and_then(truthy_flag)
        .unwrap_or(false);

    HourEntry {
        id: record.id.clone(),
        client_id: client_id.to_string(),
        date: entry_date,
        consultants,
        description,
        status: BillingStatus::from_flag(billable),
        hours,
        internal,
    }
}

/// The consultant list of a record: linked employee ids resolved to names
/// where possible, or the comma-joined free-text field of older bases.
fn consultant_names(record: &RawRecord, names: &HashMap<String, String>) -> Vec<String> {
    if let Some(value) = first_present(&record.fields, EMPLOYEE_LINK_FIELDS) {
        return match value {
            Value::Array(ids) => ids
                .iter()
                .filter_map(Value::as_str)
                .map(|id| names.get(id).cloned().unwrap_or_else(|| id.to_string()))
                .collect(),
            Value::String(id) => {
                vec![names.get(id.as_str()).cloned().unwrap_or_else(|| id.clone())]
            }
            _ => Vec::new(),
        };
    }

    first_present(&record.fields, CONSULTANT_FIELDS)
        .and_then(Value::as_str)
        .map(split_consultants)
        .unwrap_or_default()
}

pub fn split_consultants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Date coercion for the base's loose typing.
///
/// Accepted shapes: a date or datetime string, or a `[year, month, day]`
/// numeric triple (month 1-based). Anything else falls back to today so the
/// pipeline stays total.
pub fn coerce_date(value: &Value) -> NaiveDate {
    match value {
        Value::String(s) => parse_date_str(s).unwrap_or_else(date::today),
        Value::Array(parts) if parts.len() >= 3 => {
            match (parts[0].as_i64(), parts[1].as_i64(), parts[2].as_i64()) {
                (Some(y), Some(m), Some(d)) => {
                    NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
                        .unwrap_or_else(date::today)
                }
                _ => date::today(),
            }
        }
        _ => date::today(),
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    // Full timestamps: keep the calendar date only
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}
