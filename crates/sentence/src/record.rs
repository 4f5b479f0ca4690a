use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the sentence text
pub const NAME_FIELD: &str = "name";
/// Field holding the attribution (author and work)
pub const FROM_FIELD: &str = "from";
/// Numeric identifier field
pub const ID_FIELD: &str = "id";

/// One decoded dataset line: field name to arbitrary JSON value.
///
/// Every retrieval produces a fresh record owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Decode a single JSON object. Anything other than an object is rejected.
    pub fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a field as a string slice, `None` if missing or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME_FIELD)
    }

    pub fn attribution(&self) -> Option<&str> {
        self.get_str(FROM_FIELD)
    }

    pub fn id(&self) -> Option<u64> {
        self.0.get(ID_FIELD).and_then(Value::as_u64)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
