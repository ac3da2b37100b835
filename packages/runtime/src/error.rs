//! Error types for the runtime facade.

use thiserror::Error;

use blockstore_field_store::FieldError;
use blockstore_id_store::IdError;

/// Errors that can occur while materializing a block.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The id graph could not resolve the requested ids.
    #[error("id graph error: {0}")]
    Ids(#[from] IdError),

    /// A field operation failed during construction.
    #[error("field store error: {0}")]
    Fields(#[from] FieldError),

    /// The factory does not know how to build this block type.
    #[error("unknown block type: {0}")]
    UnknownBlockType(String),
}

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blockstore_id_store::UsageId;

    #[test]
    fn id_error_converts_and_displays() {
        let e: RuntimeError = IdError::NoSuchUsage(UsageId::from("u1")).into();
        assert!(matches!(e, RuntimeError::Ids(_)));
        assert!(format!("{}", e).contains("no such usage: u1"));
    }

    #[test]
    fn unknown_block_type_display() {
        let e = RuntimeError::UnknownBlockType("mystery".to_string());
        assert_eq!(format!("{}", e), "unknown block type: mystery");
    }
}
