//! Datastore backends for the blockstore record layer.
//!
//! Two implementations of the `RecordStore` traits:
//! - `InMemoryDatastore`: process-local storage behind a cheap-clone handle.
//!   Suitable for tests and single-process deployments.
//! - `JsonFileDatastore`: one JSON file per record under a root directory.
//!   Suitable as a durable local backend.
//!
//! Both backends store records verbatim; serialization happens in the
//! layers above. Neither provides transactional isolation across calls -
//! concurrent read-then-write sequences are last-write-wins.

pub mod in_memory;
pub mod local_disk;

pub use in_memory::InMemoryDatastore;
pub use local_disk::JsonFileDatastore;
