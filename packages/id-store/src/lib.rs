//! Id graph store.
//!
//! Manages the many-to-one relationship chain between block entities:
//!
//! ```text
//! usage (n) -- (1) definition (n) -- (1) block_type
//! ```
//!
//! A definition is a configured instance of a block type; a usage is one
//! placement of a definition. Both are write-once: created, never updated,
//! never deleted here. Ids are random 128-bit hex strings, so no shared
//! counter is needed and ids leak nothing about creation order or volume.
//!
//! The `IdReader` and `IdGenerator` capability traits are what the
//! component framework consumes; `IdStore` implements both over any
//! record backend.

mod error;
mod id;
mod record;
mod store;

pub use error::IdError;
pub use id::{DefinitionId, UsageId};
pub use record::{DefinitionRecord, UsageRecord};
pub use store::{IdGenerator, IdReader, IdStore};

// Re-export record-layer types for convenience
pub use blockstore_record_store::{Namespace, RecordError, RecordReader, RecordStore, RecordWriter};
