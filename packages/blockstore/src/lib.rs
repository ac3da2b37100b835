//! Blockstore: a persistence layer for pluggable block components.
//!
//! Blockstore keeps three kinds of state for a block-component framework,
//! all over one durable keyed-record backend:
//! - the id graph binding usages to definitions and definitions to block
//!   types (`IdStore`)
//! - scoped field values, keyed by a deterministic storage-key codec
//!   (`KeyValueStore`)
//! - the runtime facade that materializes a block instance from a usage
//!   id (`Runtime`)
//!
//! # Example
//!
//! ```rust
//! use blockstore::{IdGenerator, IdReader, IdStore, InMemoryDatastore};
//!
//! let mut ids = IdStore::new(InMemoryDatastore::new());
//! let def_id = ids.create_definition("html").unwrap();
//! let usage_id = ids.create_usage(&def_id).unwrap();
//! assert_eq!(ids.get_definition_id(&usage_id).unwrap(), def_id);
//! ```

pub use blockstore_datastore::{InMemoryDatastore, JsonFileDatastore};
pub use blockstore_field_store::{
    FieldError, FieldRecord, FieldScope, FieldStore, KeyValueStore, Scope, ScopeKey,
};
pub use blockstore_id_store::{
    DefinitionId, DefinitionRecord, IdError, IdGenerator, IdReader, IdStore, UsageId, UsageRecord,
};
pub use blockstore_record_store::{
    Bytes, Namespace, RecordError, RecordReader, RecordStore, RecordWriter,
};
pub use blockstore_runtime::{
    BlockFactory, FieldAccessor, Runtime, RuntimeError, ScopeIds,
};
