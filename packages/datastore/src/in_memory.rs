//! In-memory datastore backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use blockstore_record_store::{Namespace, RecordError, RecordReader, RecordWriter};

/// An in-memory record store behind a cheap-clone handle.
///
/// Clones share the same underlying map, mirroring how a real datastore
/// client hands out handles to one shared backend. Each operation locks
/// the map for the duration of that single record access only; there is
/// no isolation across operations.
///
/// # Example
///
/// ```rust
/// use blockstore_datastore::InMemoryDatastore;
/// use blockstore_record_store::{Namespace, RecordReader, RecordWriter};
/// use bytes::Bytes;
///
/// let mut store = InMemoryDatastore::new();
/// let mut other = store.clone();
///
/// store.put(Namespace::Fields, "k", Bytes::from_static(b"v")).unwrap();
/// assert_eq!(other.get(Namespace::Fields, "k").unwrap(), Some(Bytes::from_static(b"v")));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryDatastore {
    records: Arc<Mutex<HashMap<(Namespace, String), Bytes>>>,
}

impl InMemoryDatastore {
    /// Create a new empty datastore.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(Namespace, String), Bytes>> {
        // A poisoned lock still holds a consistent map; single-record
        // operations cannot tear it.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordReader for InMemoryDatastore {
    fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError> {
        Ok(self.lock().get(&(namespace, key.to_string())).cloned())
    }
}

impl RecordWriter for InMemoryDatastore {
    fn put(&mut self, namespace: Namespace, key: &str, record: Bytes) -> Result<(), RecordError> {
        self.lock().insert((namespace, key.to_string()), record);
        Ok(())
    }

    fn delete(&mut self, namespace: Namespace, key: &str) -> Result<(), RecordError> {
        self.lock().remove(&(namespace, key.to_string()));
        Ok(())
    }
}
