//! Field-name alias tables for the external base.
//!
//! The base's column names are not contractually fixed: bases in the wild
//! carry historical spellings of the same logical attribute. Each logical
//! attribute therefore has an ordered alias list, resolved first-present-
//! non-empty. Keep these declarative — no scattered per-call-site guessing.

use serde_json::{Map, Value};

/// Link field of an hour entry to its client record(s).
pub const CLIENT_LINK_FIELDS: &[&str] =
    &["Clients", "ClientID", "Client ID", "ClientId", "clientID"];

/// Link field of an hour entry to its employee record(s).
pub const EMPLOYEE_LINK_FIELDS: &[&str] = &["Employees"];

/// Free-text consultant name, used by bases that never linked employees.
pub const CONSULTANT_FIELDS: &[&str] = &["Consultant"];

pub const DATE_FIELDS: &[&str] = &["Date"];

pub const DESCRIPTION_FIELDS: &[&str] = &["Summary", "Description"];

pub const BILLABLE_FIELDS: &[&str] = &["Billable", "Status"];

pub const HOURS_FIELDS: &[&str] = &["Hours Logged", "Hours"];

pub const INTERNAL_FIELDS: &[&str] = &["Internal"];

/// Column of the Clients table holding the generated dashboard URL.
pub const URL_FIELDS: &[&str] = &[
    "GeneratedPageURL",
    "Generated Page URL",
    "GeneratedPageUrl",
    "generatedPageURL",
    "Generated URL",
    "Page URL",
    "Client URL",
    "Dashboard URL",
];

/// Candidate names of the employee table, probed in order.
pub const EMPLOYEE_TABLES: &[&str] = &[
    "Employees",
    "Employee",
    "Consultants",
    "Consultant",
    "People",
    "People Table",
    "Staff",
];

/// First present, non-empty value among the aliases.
pub fn first_present<'a>(fields: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    for name in aliases {
        if let Some(value) = fields.get(*name)
            && !is_empty(value)
        {
            return Some(value);
        }
    }
    None
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Interpret a checkbox-or-select flag.
///
/// - bool, or the numbers 1/0 → that truth value
/// - "yes"/"y" (any case, trimmed) → true
/// - "no"/"n" → explicitly false
/// - anything else → None (caller picks the safe default)
pub fn truthy_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(x) if x == 1.0 => Some(true),
            Some(x) if x == 0.0 => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(true),
            "no" | "n" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
