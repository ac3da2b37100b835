//! Error types for the id graph store.

use thiserror::Error;

use blockstore_record_store::{Namespace, RecordError};

use crate::{DefinitionId, UsageId};

/// Errors from id-graph operations.
#[derive(Debug, Error)]
pub enum IdError {
    /// The usage id was never issued (or was issued for another kind).
    #[error("no such usage: {0}")]
    NoSuchUsage(UsageId),

    /// The definition id was never issued (or was issued for another kind).
    #[error("no such definition: {0}")]
    NoSuchDefinition(DefinitionId),

    /// A record could not be encoded for storage or decoded from it.
    #[error("corrupt {namespace} record {key}: {message}")]
    Corrupt {
        namespace: Namespace,
        key: String,
        message: String,
    },

    /// The record backend failed.
    #[error("record store error: {0}")]
    Store(#[from] RecordError),
}
