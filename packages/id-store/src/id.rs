//! Opaque entity identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a definition.
///
/// Generated ids are 32 lowercase hex characters (128 random bits), which
/// keeps them free of the `.` storage-key delimiter by construction.
/// Externally supplied ids are accepted verbatim; an id that was never
/// issued simply resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(String);

/// Identifier of a usage (one placement of a definition).
///
/// Same shape and generation scheme as `DefinitionId`, but the two live in
/// separate datastore namespaces, so they never resolve across kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageId(String);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Generate a fresh random id.
            ///
            /// Collisions across 128 random bits are statistically
            /// negligible and are not handled.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().as_simple().to_string())
            }

            /// View the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_id!(DefinitionId);
impl_id!(UsageId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_plain_hex() {
        let id = DefinitionId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!id.as_str().contains('.'));
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(UsageId::generate(), UsageId::generate());
    }

    #[test]
    fn external_ids_round_trip() {
        let id = UsageId::from("i_dont_exist");
        assert_eq!(id.as_str(), "i_dont_exist");
        assert_eq!(format!("{}", id), "i_dont_exist");
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = DefinitionId::from("d1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"d1\"");

        let back: DefinitionId = serde_json::from_str("\"d1\"").unwrap();
        assert_eq!(back, id);
    }
}
