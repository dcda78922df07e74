use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the external base, exactly as the base keeps it: an opaque
/// id plus a loosely-typed field map. Field names are not contractually
/// fixed; every consumer goes through the alias tables in `core::fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
