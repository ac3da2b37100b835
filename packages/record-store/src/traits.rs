//! Core traits for the record layer.

use bytes::Bytes;

use crate::RecordError;

/// Logical partition of the backing datastore.
///
/// Definitions, usages, and field records never share a key space, so a
/// textual key coincidence across record kinds cannot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// Definition records: block-type configuration entities.
    Definitions,
    /// Usage records: placements of a definition.
    Usages,
    /// Field value records, keyed by derived storage key.
    Fields,
}

impl Namespace {
    /// Stable name of the namespace, usable as a table or directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Definitions => "definitions",
            Namespace::Usages => "usages",
            Namespace::Fields => "fields",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read records from a namespaced key.
///
/// This is the lowest-level read interface. Keys are opaque strings and
/// the returned payload is just bytes. No parsing, no validation.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn RecordReader>`.
pub trait RecordReader: Send + Sync {
    /// Read the record stored under `key` in `namespace`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No record under the key (not an error condition).
    /// * `Ok(Some(bytes))` - The record payload.
    /// * `Err(RecordError)` - A transport or system error occurred.
    fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError>;
}

/// Write and delete records under a namespaced key.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn RecordWriter>`.
pub trait RecordWriter: Send + Sync {
    /// Write `record` under `key` in `namespace`, overwriting any
    /// previous payload.
    fn put(&mut self, namespace: Namespace, key: &str, record: Bytes) -> Result<(), RecordError>;

    /// Delete the record under `key` in `namespace`.
    ///
    /// Deleting an absent key is a successful no-op.
    fn delete(&mut self, namespace: Namespace, key: &str) -> Result<(), RecordError>;
}

/// Combined read/write at the record level.
///
/// Automatically implemented for any type that implements both
/// `RecordReader` and `RecordWriter`.
pub trait RecordStore: RecordReader + RecordWriter {}
impl<T: RecordReader + RecordWriter> RecordStore for T {}

// Blanket implementations for references and boxes

impl<T: RecordReader + ?Sized> RecordReader for &mut T {
    fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError> {
        (*self).get(namespace, key)
    }
}

impl<T: RecordWriter + ?Sized> RecordWriter for &mut T {
    fn put(&mut self, namespace: Namespace, key: &str, record: Bytes) -> Result<(), RecordError> {
        (*self).put(namespace, key, record)
    }

    fn delete(&mut self, namespace: Namespace, key: &str) -> Result<(), RecordError> {
        (*self).delete(namespace, key)
    }
}

impl<T: RecordReader + ?Sized> RecordReader for Box<T> {
    fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError> {
        self.as_mut().get(namespace, key)
    }
}

impl<T: RecordWriter + ?Sized> RecordWriter for Box<T> {
    fn put(&mut self, namespace: Namespace, key: &str, record: Bytes) -> Result<(), RecordError> {
        self.as_mut().put(namespace, key, record)
    }

    fn delete(&mut self, namespace: Namespace, key: &str) -> Result<(), RecordError> {
        self.as_mut().delete(namespace, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// A simple in-memory record store for testing.
    struct TestRecordStore {
        data: HashMap<(Namespace, String), Bytes>,
    }

    impl TestRecordStore {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl RecordReader for TestRecordStore {
        fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError> {
            Ok(self.data.get(&(namespace, key.to_string())).cloned())
        }
    }

    impl RecordWriter for TestRecordStore {
        fn put(
            &mut self,
            namespace: Namespace,
            key: &str,
            record: Bytes,
        ) -> Result<(), RecordError> {
            self.data.insert((namespace, key.to_string()), record);
            Ok(())
        }

        fn delete(&mut self, namespace: Namespace, key: &str) -> Result<(), RecordError> {
            self.data.remove(&(namespace, key.to_string()));
            Ok(())
        }
    }

    #[test]
    fn basic_put_get_works() {
        let mut store = TestRecordStore::new();

        let payload = Bytes::from_static(b"{\"block_type\":\"html\"}");
        store
            .put(Namespace::Definitions, "d1", payload.clone())
            .unwrap();

        let result = store.get(Namespace::Definitions, "d1").unwrap();
        assert_eq!(result, Some(payload));

        let result = store.get(Namespace::Definitions, "missing").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn namespaces_do_not_collide() {
        let mut store = TestRecordStore::new();

        store
            .put(Namespace::Definitions, "same", Bytes::from_static(b"def"))
            .unwrap();
        store
            .put(Namespace::Usages, "same", Bytes::from_static(b"usage"))
            .unwrap();

        assert_eq!(
            store.get(Namespace::Definitions, "same").unwrap(),
            Some(Bytes::from_static(b"def"))
        );
        assert_eq!(
            store.get(Namespace::Usages, "same").unwrap(),
            Some(Bytes::from_static(b"usage"))
        );
        assert_eq!(store.get(Namespace::Fields, "same").unwrap(), None);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = TestRecordStore::new();

        store
            .put(Namespace::Fields, "k", Bytes::from_static(b"v"))
            .unwrap();
        store.delete(Namespace::Fields, "k").unwrap();
        assert_eq!(store.get(Namespace::Fields, "k").unwrap(), None);

        // Deleting again is still fine.
        store.delete(Namespace::Fields, "k").unwrap();
    }

    #[test]
    fn object_safety_works() {
        let mut store = TestRecordStore::new();
        let boxed: &mut dyn RecordStore = &mut store;

        boxed
            .put(Namespace::Fields, "k", Bytes::from_static(b"v"))
            .unwrap();
        let result = boxed.get(Namespace::Fields, "k").unwrap();
        assert_eq!(result, Some(Bytes::from_static(b"v")));
    }

    #[test]
    fn box_blanket_impl_works() {
        let store = TestRecordStore::new();
        let mut boxed: Box<dyn RecordStore> = Box::new(store);

        boxed
            .put(Namespace::Usages, "u", Bytes::from_static(b"data"))
            .unwrap();
        assert_eq!(
            boxed.get(Namespace::Usages, "u").unwrap(),
            Some(Bytes::from_static(b"data"))
        );
        boxed.delete(Namespace::Usages, "u").unwrap();
        assert_eq!(boxed.get(Namespace::Usages, "u").unwrap(), None);
    }

    #[test]
    fn namespace_names_are_distinct() {
        assert_eq!(Namespace::Definitions.as_str(), "definitions");
        assert_eq!(Namespace::Usages.as_str(), "usages");
        assert_eq!(Namespace::Fields.as_str(), "fields");
        assert_eq!(format!("{}", Namespace::Fields), "fields");
    }
}
