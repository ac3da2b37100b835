//! The scoped key-value store over a record backend.

use bytes::Bytes;
use serde_json::Value as JsonValue;

use blockstore_record_store::{Namespace, RecordStore};

use crate::{FieldError, FieldRecord, ScopeKey};

/// Scoped field access, as consumed by the component framework.
///
/// All four operations derive the flat storage key from the scope key and
/// perform one backend round trip. There is no caching layer and no
/// isolation across calls: concurrent `set`s to the same key are
/// last-write-wins.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn FieldStore>`.
pub trait FieldStore: Send + Sync {
    /// Retrieve the value stored under `key`.
    ///
    /// Fails with `FieldError::NotFound` when nothing was ever set, which
    /// callers normally treat as "use the field default".
    fn get(&mut self, key: &ScopeKey) -> Result<JsonValue, FieldError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &ScopeKey, value: JsonValue) -> Result<(), FieldError>;

    /// Remove the value under `key`. A no-op if nothing is stored.
    fn delete(&mut self, key: &ScopeKey) -> Result<(), FieldError>;

    /// Whether a value is stored under `key`, without decoding it.
    fn has(&mut self, key: &ScopeKey) -> Result<bool, FieldError>;
}

/// `FieldStore` implementation over any record backend.
///
/// Stateless accessor: the only state is the backend handle itself.
///
/// # Example
///
/// ```rust
/// use blockstore_datastore::InMemoryDatastore;
/// use blockstore_field_store::{FieldStore, KeyValueStore, Scope, ScopeKey};
/// use serde_json::json;
///
/// let mut store = KeyValueStore::new(InMemoryDatastore::new());
/// let key = ScopeKey {
///     scope: Scope::Usage,
///     block_scope_id: Some("u1".to_string()),
///     user_id: None,
///     field_name: "count".to_string(),
/// };
///
/// store.set(&key, json!(3)).unwrap();
/// assert_eq!(store.get(&key).unwrap(), json!(3));
/// ```
pub struct KeyValueStore<S> {
    backend: S,
}

impl<S: RecordStore> KeyValueStore<S> {
    /// Create a store over the given backend handle.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }
}

impl<S: RecordStore> FieldStore for KeyValueStore<S> {
    fn get(&mut self, key: &ScopeKey) -> Result<JsonValue, FieldError> {
        let storage_key = key.storage_key();

        let Some(bytes) = self.backend.get(Namespace::Fields, &storage_key)? else {
            return Err(FieldError::NotFound { key: storage_key });
        };

        let record = FieldRecord::from_bytes(&bytes).map_err(|e| FieldError::Decode {
            key: storage_key,
            message: e.to_string(),
        })?;
        Ok(record.value)
    }

    fn set(&mut self, key: &ScopeKey, value: JsonValue) -> Result<(), FieldError> {
        let storage_key = key.storage_key();

        let bytes = FieldRecord::new(value)
            .to_bytes()
            .map_err(|e| FieldError::Encode {
                key: storage_key.clone(),
                message: e.to_string(),
            })?;

        self.backend
            .put(Namespace::Fields, &storage_key, Bytes::from(bytes))?;
        Ok(())
    }

    fn delete(&mut self, key: &ScopeKey) -> Result<(), FieldError> {
        self.backend.delete(Namespace::Fields, &key.storage_key())?;
        Ok(())
    }

    fn has(&mut self, key: &ScopeKey) -> Result<bool, FieldError> {
        Ok(self
            .backend
            .get(Namespace::Fields, &key.storage_key())?
            .is_some())
    }
}

// Blanket implementations for references and boxes

impl<T: FieldStore + ?Sized> FieldStore for &mut T {
    fn get(&mut self, key: &ScopeKey) -> Result<JsonValue, FieldError> {
        (*self).get(key)
    }

    fn set(&mut self, key: &ScopeKey, value: JsonValue) -> Result<(), FieldError> {
        (*self).set(key, value)
    }

    fn delete(&mut self, key: &ScopeKey) -> Result<(), FieldError> {
        (*self).delete(key)
    }

    fn has(&mut self, key: &ScopeKey) -> Result<bool, FieldError> {
        (*self).has(key)
    }
}

impl<T: FieldStore + ?Sized> FieldStore for Box<T> {
    fn get(&mut self, key: &ScopeKey) -> Result<JsonValue, FieldError> {
        self.as_mut().get(key)
    }

    fn set(&mut self, key: &ScopeKey, value: JsonValue) -> Result<(), FieldError> {
        self.as_mut().set(key, value)
    }

    fn delete(&mut self, key: &ScopeKey) -> Result<(), FieldError> {
        self.as_mut().delete(key)
    }

    fn has(&mut self, key: &ScopeKey) -> Result<bool, FieldError> {
        self.as_mut().has(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scope;
    use blockstore_datastore::InMemoryDatastore;
    use serde_json::json;

    fn user_state_key() -> ScopeKey {
        ScopeKey {
            scope: Scope::Usage,
            block_scope_id: Some("456".to_string()),
            user_id: Some("123".to_string()),
            field_name: "my_field".to_string(),
        }
    }

    fn new_store() -> KeyValueStore<InMemoryDatastore> {
        KeyValueStore::new(InMemoryDatastore::new())
    }

    #[test]
    fn set_then_get() {
        let mut store = new_store();
        let key = user_state_key();

        store.set(&key, json!("data")).unwrap();
        assert!(store.has(&key).unwrap());
        assert_eq!(store.get(&key).unwrap(), json!("data"));
    }

    #[test]
    fn set_then_get_rich_data() {
        let mut store = new_store();
        let key = user_state_key();
        let data = json!({
            "a": "A",
            "b": 3.14,
            "c": {
                "aa": "AA",
                "bb": [1, 2, 3],
            },
        });

        store.set(&key, data.clone()).unwrap();
        assert!(store.has(&key).unwrap());
        assert_eq!(store.get(&key).unwrap(), data);
    }

    #[test]
    fn get_without_set_is_not_found() {
        let mut store = new_store();

        let err = store.get(&user_state_key()).unwrap_err();
        assert!(matches!(err, FieldError::NotFound { .. }));
    }

    #[test]
    fn get_for_other_user_is_not_found() {
        let mut store = new_store();
        let key = user_state_key();
        store.set(&key, json!("data")).unwrap();

        let other_user = ScopeKey {
            user_id: Some("124".to_string()),
            ..key
        };
        let err = store.get(&other_user).unwrap_err();
        assert!(matches!(err, FieldError::NotFound { .. }));
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut store = new_store();
        let key = user_state_key();

        store.set(&key, json!(1)).unwrap();
        store.set(&key, json!(2)).unwrap();
        assert_eq!(store.get(&key).unwrap(), json!(2));
    }

    #[test]
    fn delete_removes_value() {
        let mut store = new_store();
        let key = user_state_key();

        store.set(&key, json!("data")).unwrap();
        assert!(store.has(&key).unwrap());

        store.delete(&key).unwrap();
        assert!(!store.has(&key).unwrap());
        assert!(matches!(
            store.get(&key).unwrap_err(),
            FieldError::NotFound { .. }
        ));
    }

    #[test]
    fn delete_without_set_is_noop() {
        let mut store = new_store();
        let key = user_state_key();

        assert!(!store.has(&key).unwrap());
        store.delete(&key).unwrap();
        assert!(!store.has(&key).unwrap());
    }

    #[test]
    fn values_are_visible_through_shared_backend() {
        let backend = InMemoryDatastore::new();
        let mut writer = KeyValueStore::new(backend.clone());
        let mut reader = KeyValueStore::new(backend);
        let key = user_state_key();

        writer.set(&key, json!([1, 2])).unwrap();
        assert_eq!(reader.get(&key).unwrap(), json!([1, 2]));
    }

    #[test]
    fn object_safety_works() {
        let mut boxed: Box<dyn FieldStore> = Box::new(new_store());
        let key = user_state_key();

        boxed.set(&key, json!(true)).unwrap();
        assert_eq!(boxed.get(&key).unwrap(), json!(true));
    }
}
