//! Error types for the record layer.
//!
//! Errors at this level are transport-focused. No semantic errors like
//! "no such usage" or "field never set" - those belong in higher layers.

/// Errors at the record (backend) layer.
///
/// These are transport and system-level errors only. Semantic errors
/// (missing entities, codec failures) belong in higher layers.
#[derive(Debug)]
pub enum RecordError {
    /// Generic I/O or transport failure.
    ///
    /// Use this for network errors, file I/O errors, datastore client
    /// failures, etc.
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// The operation is not supported by this backend.
    ///
    /// For example, writing to a read-only backend.
    NotSupported,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Transport(e) => write!(f, "transport error: {}", e),
            RecordError::NotSupported => write!(f, "operation not supported"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Transport(e) => Some(e.as_ref()),
            RecordError::NotSupported => None,
        }
    }
}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        RecordError::Transport(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_works() {
        let e = RecordError::NotSupported;
        assert_eq!(format!("{}", e), "operation not supported");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RecordError = io_err.into();
        assert!(matches!(err, RecordError::Transport(_)));
        assert!(format!("{}", err).contains("file not found"));
    }

    #[test]
    fn transport_error_has_source() {
        let io_err = std::io::Error::other("backend down");
        let err: RecordError = io_err.into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
