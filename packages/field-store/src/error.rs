//! Error types for the field store.

use thiserror::Error;

use blockstore_record_store::RecordError;

/// Errors from scoped field operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// No value stored under the derived storage key.
    ///
    /// Recoverable: it usually means the field was never set.
    #[error("no value stored under key: {key}")]
    NotFound { key: String },

    /// The value could not be serialized for storage.
    #[error("encode failure for key {key}: {message}")]
    Encode { key: String, message: String },

    /// The stored record could not be deserialized.
    #[error("decode failure for key {key}: {message}")]
    Decode { key: String, message: String },

    /// The record backend failed.
    #[error("record store error: {0}")]
    Store(#[from] RecordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_key() {
        let e = FieldError::NotFound {
            key: "usage.456.123.my_field".to_string(),
        };
        assert!(format!("{}", e).contains("usage.456.123.my_field"));
    }

    #[test]
    fn record_error_converts() {
        let e: FieldError = RecordError::NotSupported.into();
        assert!(matches!(e, FieldError::Store(_)));
    }
}
