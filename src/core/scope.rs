//! Client scoping and internal-entry exclusion over raw records.

use crate::core::fields::{CLIENT_LINK_FIELDS, INTERNAL_FIELDS, first_present, truthy_flag};
use crate::store::record::RawRecord;
use serde_json::Value;

/// True when the record's client link contains `client_id`.
///
/// Link fields are arrays of record ids; a bare string is accepted as an
/// exact match. A record with no resolvable link field is simply out of
/// scope, never an error.
pub fn links_to_client(record: &RawRecord, client_id: &str) -> bool {
    match first_present(&record.fields, CLIENT_LINK_FIELDS) {
        Some(Value::Array(ids)) => ids.iter().any(|v| v.as_str() == Some(client_id)),
        Some(Value::String(s)) => s == client_id,
        _ => false,
    }
}

/// Internal entries never reach client-facing views, billable or not.
/// An absent or unrecognized signal means "not internal".
pub fn is_internal(record: &RawRecord) -> bool {
    first_present(&record.fields, INTERNAL_FIELDS).and_then(truthy_flag) == Some(true)
}
