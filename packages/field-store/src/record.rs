//! The persisted shape of one field value.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A field value as stored in the `fields` namespace.
///
/// The payload is an arbitrary JSON-compatible structure wrapped in an
/// explicit record struct, so the serialized form stays stable even if
/// more attributes are added later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// The field's value.
    pub value: JsonValue,
}

impl FieldRecord {
    /// Wrap a value for storage.
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Serialize to the stored JSON byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from the stored JSON byte form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn byte_roundtrip() {
        let record = FieldRecord::new(json!({
            "a": "A",
            "b": 3.14,
            "c": {"bb": [1, 2, 3]},
        }));

        let bytes = record.to_bytes().unwrap();
        let recovered = FieldRecord::from_bytes(&bytes).unwrap();

        assert_eq!(record, recovered);
    }

    #[test]
    fn null_is_a_storable_value() {
        let record = FieldRecord::new(JsonValue::Null);
        let bytes = record.to_bytes().unwrap();
        assert_eq!(FieldRecord::from_bytes(&bytes).unwrap().value, JsonValue::Null);
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(FieldRecord::from_bytes(b"not json").is_err());
    }
}
