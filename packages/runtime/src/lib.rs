//! Runtime facade for block components.
//!
//! The runtime composes the id graph store and the scoped field store to
//! materialize a component instance from a usage id:
//! - resolve usage id -> definition id -> block type through the id graph
//! - assemble the `ScopeIds` identity bundle
//! - hand the component a `FieldAccessor` that scopes every field access
//!   by those ids and the acting user
//!
//! Block construction itself belongs to the component framework; it plugs
//! in through the `BlockFactory` trait.

mod block;
mod error;
mod runtime;

pub use block::{BlockFactory, FieldAccessor, ScopeIds};
pub use error::{Result, RuntimeError};
pub use runtime::Runtime;

// Re-export the store types the facade is built from
pub use blockstore_field_store::{FieldError, FieldScope, FieldStore, KeyValueStore, Scope, ScopeKey};
pub use blockstore_id_store::{
    DefinitionId, IdError, IdGenerator, IdReader, IdStore, UsageId,
};
pub use blockstore_record_store::{Namespace, RecordError, RecordStore};
