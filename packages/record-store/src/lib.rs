//! Blockstore record layer: durable keyed-record traits.
//!
//! This is the narrow waist of the blockstore stack. Everything at this
//! level is an opaque record - no value semantics, no serialization, no
//! key derivation. A record is a `Bytes` payload stored under a string key
//! inside one of a fixed set of namespaces.
//!
//! Use this layer for:
//! - Implementing a datastore backend (in-memory, on-disk, remote)
//! - Moving records between backends without inspecting them
//!
//! # Example
//!
//! ```rust
//! use blockstore_record_store::{Namespace, RecordReader, RecordError};
//! use bytes::Bytes;
//!
//! struct InMemoryRecords {
//!     data: std::collections::HashMap<(Namespace, String), Bytes>,
//! }
//!
//! impl RecordReader for InMemoryRecords {
//!     fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError> {
//!         Ok(self.data.get(&(namespace, key.to_string())).cloned())
//!     }
//! }
//! ```

pub use bytes::Bytes;

mod error;
mod traits;

pub use error::RecordError;
pub use traits::{Namespace, RecordReader, RecordStore, RecordWriter};
