//! The id graph store over a record backend.

use bytes::Bytes;

use blockstore_record_store::{Namespace, RecordStore};

use crate::{DefinitionId, DefinitionRecord, IdError, UsageId, UsageRecord};

/// Resolve ids to their parents in the id graph.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn IdReader>`.
pub trait IdReader: Send + Sync {
    /// Retrieve the definition id this usage id is bound to.
    fn get_definition_id(&mut self, usage_id: &UsageId) -> Result<DefinitionId, IdError>;

    /// Retrieve the block type this definition id is bound to.
    fn get_block_type(&mut self, definition_id: &DefinitionId) -> Result<String, IdError>;
}

/// Issue new ids into the id graph.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn IdGenerator>`.
pub trait IdGenerator: Send + Sync {
    /// Create a new definition id bound to the given block type.
    fn create_definition(&mut self, block_type: &str) -> Result<DefinitionId, IdError>;

    /// Create a new usage id bound to the given definition id.
    ///
    /// # Panics
    ///
    /// Panics if `definition_id` does not resolve to an existing
    /// definition. A dangling reference here is a caller bug, not a
    /// runtime condition; the check runs before anything is written, so
    /// no usage record is persisted when it fires.
    fn create_usage(&mut self, definition_id: &DefinitionId) -> Result<UsageId, IdError>;
}

/// `IdReader` and `IdGenerator` implementation over any record backend.
///
/// The existence check inside `create_usage` and the write that follows it
/// are two separate backend calls with no isolation between them; see the
/// crate docs for the consistency model.
///
/// # Example
///
/// ```rust
/// use blockstore_datastore::InMemoryDatastore;
/// use blockstore_id_store::{IdGenerator, IdReader, IdStore};
///
/// let mut ids = IdStore::new(InMemoryDatastore::new());
///
/// let def_id = ids.create_definition("html").unwrap();
/// let usage_id = ids.create_usage(&def_id).unwrap();
///
/// assert_eq!(ids.get_definition_id(&usage_id).unwrap(), def_id);
/// assert_eq!(ids.get_block_type(&def_id).unwrap(), "html");
/// ```
pub struct IdStore<S> {
    backend: S,
}

impl<S: RecordStore> IdStore<S> {
    /// Create a store over the given backend handle.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    fn read_definition(&mut self, id: &DefinitionId) -> Result<DefinitionRecord, IdError> {
        let Some(bytes) = self.backend.get(Namespace::Definitions, id.as_str())? else {
            return Err(IdError::NoSuchDefinition(id.clone()));
        };

        DefinitionRecord::from_bytes(&bytes).map_err(|e| IdError::Corrupt {
            namespace: Namespace::Definitions,
            key: id.as_str().to_string(),
            message: e.to_string(),
        })
    }

    fn read_usage(&mut self, id: &UsageId) -> Result<UsageRecord, IdError> {
        let Some(bytes) = self.backend.get(Namespace::Usages, id.as_str())? else {
            return Err(IdError::NoSuchUsage(id.clone()));
        };

        UsageRecord::from_bytes(&bytes).map_err(|e| IdError::Corrupt {
            namespace: Namespace::Usages,
            key: id.as_str().to_string(),
            message: e.to_string(),
        })
    }

    fn definition_exists(&mut self, id: &DefinitionId) -> Result<bool, IdError> {
        Ok(self
            .backend
            .get(Namespace::Definitions, id.as_str())?
            .is_some())
    }
}

impl<S: RecordStore> IdReader for IdStore<S> {
    fn get_definition_id(&mut self, usage_id: &UsageId) -> Result<DefinitionId, IdError> {
        Ok(self.read_usage(usage_id)?.definition_id)
    }

    fn get_block_type(&mut self, definition_id: &DefinitionId) -> Result<String, IdError> {
        Ok(self.read_definition(definition_id)?.block_type)
    }
}

impl<S: RecordStore> IdGenerator for IdStore<S> {
    fn create_definition(&mut self, block_type: &str) -> Result<DefinitionId, IdError> {
        let id = DefinitionId::generate();
        let record = DefinitionRecord {
            block_type: block_type.to_string(),
        };
        let bytes = record.to_bytes().map_err(|e| IdError::Corrupt {
            namespace: Namespace::Definitions,
            key: id.as_str().to_string(),
            message: e.to_string(),
        })?;
        self.backend
            .put(Namespace::Definitions, id.as_str(), Bytes::from(bytes))?;
        Ok(id)
    }

    fn create_usage(&mut self, definition_id: &DefinitionId) -> Result<UsageId, IdError> {
        let exists = self.definition_exists(definition_id)?;
        assert!(
            exists,
            "create_usage called with nonexistent definition id {}",
            definition_id
        );

        let id = UsageId::generate();
        let record = UsageRecord {
            definition_id: definition_id.clone(),
        };
        let bytes = record.to_bytes().map_err(|e| IdError::Corrupt {
            namespace: Namespace::Usages,
            key: id.as_str().to_string(),
            message: e.to_string(),
        })?;
        self.backend
            .put(Namespace::Usages, id.as_str(), Bytes::from(bytes))?;
        Ok(id)
    }
}

// Blanket implementations for references and boxes

impl<T: IdReader + ?Sized> IdReader for &mut T {
    fn get_definition_id(&mut self, usage_id: &UsageId) -> Result<DefinitionId, IdError> {
        (*self).get_definition_id(usage_id)
    }

    fn get_block_type(&mut self, definition_id: &DefinitionId) -> Result<String, IdError> {
        (*self).get_block_type(definition_id)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &mut T {
    fn create_definition(&mut self, block_type: &str) -> Result<DefinitionId, IdError> {
        (*self).create_definition(block_type)
    }

    fn create_usage(&mut self, definition_id: &DefinitionId) -> Result<UsageId, IdError> {
        (*self).create_usage(definition_id)
    }
}

impl<T: IdReader + ?Sized> IdReader for Box<T> {
    fn get_definition_id(&mut self, usage_id: &UsageId) -> Result<DefinitionId, IdError> {
        self.as_mut().get_definition_id(usage_id)
    }

    fn get_block_type(&mut self, definition_id: &DefinitionId) -> Result<String, IdError> {
        self.as_mut().get_block_type(definition_id)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Box<T> {
    fn create_definition(&mut self, block_type: &str) -> Result<DefinitionId, IdError> {
        self.as_mut().create_definition(block_type)
    }

    fn create_usage(&mut self, definition_id: &DefinitionId) -> Result<UsageId, IdError> {
        self.as_mut().create_usage(definition_id)
    }
}
