//! Persisted shapes of id-graph entities.

use serde::{Deserialize, Serialize};

use crate::DefinitionId;

/// A definition as stored in the `definitions` namespace.
///
/// `block_type` is set at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    /// The component kind this definition configures.
    pub block_type: String,
}

/// A usage as stored in the `usages` namespace.
///
/// `definition_id` references an existing definition; the reference is
/// checked at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// The definition this usage is a placement of.
    pub definition_id: DefinitionId,
}

impl DefinitionRecord {
    /// Serialize to the stored JSON byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from the stored JSON byte form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl UsageRecord {
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

    #[test]
    fn definition_record_roundtrip() {
        let record = DefinitionRecord {
            block_type: "html".to_string(),
        };
        let bytes = record.to_bytes().unwrap();
        assert_eq!(DefinitionRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn usage_record_roundtrip() {
        let record = UsageRecord {
            definition_id: DefinitionId::from("d1"),
        };
        let bytes = record.to_bytes().unwrap();
        assert_eq!(UsageRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn stored_form_uses_named_attributes() {
        let record = UsageRecord {
            definition_id: DefinitionId::from("d1"),
        };
        let json: serde_json::Value =
            serde_json::from_slice(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(json["definition_id"], "d1");
    }
}
