//! The runtime facade.

use blockstore_field_store::KeyValueStore;
use blockstore_id_store::{IdReader, IdStore, UsageId};
use blockstore_record_store::RecordStore;

use crate::block::{BlockFactory, FieldAccessor, ScopeIds};
use crate::error::Result;

/// Materializes block instances from usage ids.
///
/// Holds one backend handle shared by the id graph and the field store,
/// a block factory, and the acting user for this runtime's request.
/// Materializing a block performs two id-graph reads and no writes.
///
/// # Example
///
/// ```ignore
/// let mut runtime = Runtime::with_user(backend, factory, "student_01");
/// let block = runtime.get_block(&usage_id)?;
/// ```
pub struct Runtime<S: RecordStore + Clone, F> {
    ids: IdStore<S>,
    backend: S,
    factory: F,
    user_id: Option<String>,
}

impl<S, F> Runtime<S, F>
where
    S: RecordStore + Clone,
    F: BlockFactory<KeyValueStore<S>>,
{
    /// Create a runtime with no acting user.
    pub fn new(backend: S, factory: F) -> Self {
        Self {
            ids: IdStore::new(backend.clone()),
            backend,
            factory,
            user_id: None,
        }
    }

    /// Create a runtime acting on behalf of one user.
    pub fn with_user(backend: S, factory: F, user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::new(backend, factory)
        }
    }

    /// The acting user, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The id graph over this runtime's backend handle.
    ///
    /// Callers use this to create definitions and usages before asking
    /// for blocks.
    pub fn ids(&mut self) -> &mut IdStore<S> {
        &mut self.ids
    }

    /// Materialize the block instance for a usage id.
    ///
    /// Resolves the usage to its definition and block type, then hands
    /// the factory a field accessor scoped by the resolved ids and the
    /// acting user. Resolution failures (`NoSuchUsage`,
    /// `NoSuchDefinition`) propagate unchanged inside the error.
    pub fn get_block(&mut self, usage_id: &UsageId) -> Result<F::Block> {
        let definition_id = self.ids.get_definition_id(usage_id)?;
        let block_type = self.ids.get_block_type(&definition_id)?;

        tracing::debug!(%usage_id, %definition_id, %block_type, "materializing block");

        let scope_ids = ScopeIds {
            user_id: self.user_id.clone(),
            block_type: block_type.clone(),
            definition_id,
            usage_id: usage_id.clone(),
        };
        let fields = FieldAccessor::new(KeyValueStore::new(self.backend.clone()), scope_ids);

        self.factory.construct_block(&block_type, fields)
    }
}
