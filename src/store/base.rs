use crate::errors::AppResult;
use crate::store::record::RawRecord;
use serde_json::{Map, Value};

/// The three operations the external base exposes.
///
/// `find` must fail with `AppError::RecordNotFound` when the id misses, and
/// `update` with `AppError::UnknownField` when the base has no such column;
/// callers branch on both. Any other failure is a generic store error.
pub trait RecordStore {
    /// All records of a named table, in original fetch order.
    fn list(&self, table: &str) -> AppResult<Vec<RawRecord>>;

    /// One record by id.
    fn find(&self, table: &str, id: &str) -> AppResult<RawRecord>;

    /// Merge the given field values into a record.
    fn update(&self, table: &str, id: &str, fields: &Map<String, Value>) -> AppResult<()>;
}
