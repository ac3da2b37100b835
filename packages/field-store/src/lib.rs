//! Scoped key-value field store.
//!
//! Field values are partitioned by scope: per-usage, per-definition,
//! per-type, shared, or the block's children/parent lists, optionally
//! narrowed to a single user. This crate provides:
//! - `Scope` and `ScopeKey`: the scope model and the deterministic mapping
//!   from a scope key to a flat storage key
//! - `FieldRecord`: the persisted shape of one field value
//! - `FieldStore`: the capability trait the component framework programs
//!   against, and `KeyValueStore`, its implementation over any record
//!   backend
//!
//! # Example
//!
//! ```rust
//! use blockstore_field_store::{Scope, ScopeKey};
//!
//! let key = ScopeKey {
//!     scope: Scope::Usage,
//!     block_scope_id: Some("456".to_string()),
//!     user_id: Some("123".to_string()),
//!     field_name: "my_field".to_string(),
//! };
//! assert_eq!(key.storage_key(), "usage.456.123.my_field");
//! ```

mod error;
mod record;
mod scope;
mod store;

pub use error::FieldError;
pub use record::FieldRecord;
pub use scope::{FieldScope, Scope, ScopeKey};
pub use store::{FieldStore, KeyValueStore};

// Re-export record-layer types for convenience
pub use blockstore_record_store::{Namespace, RecordError, RecordReader, RecordStore, RecordWriter};
