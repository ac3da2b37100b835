//! Block identity and scoped field access.

use serde_json::Value as JsonValue;

use blockstore_field_store::{FieldError, FieldScope, FieldStore, Scope, ScopeKey};
use blockstore_id_store::{DefinitionId, UsageId};

use crate::error::Result;

/// The identity bundle of one materialized block.
///
/// Everything a field access needs to be scoped correctly: the acting
/// user (if any), the block type, and the definition/usage pair the block
/// was materialized from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeIds {
    /// The acting user, passed through opaquely from the caller.
    pub user_id: Option<String>,
    /// The block's component kind.
    pub block_type: String,
    /// The definition the block's usage is bound to.
    pub definition_id: DefinitionId,
    /// The usage the block was materialized from.
    pub usage_id: UsageId,
}

/// Scoped field access for one block instance.
///
/// Wraps a `FieldStore` and derives the full `ScopeKey` for each access
/// from the block's `ScopeIds`: the block-scope id is chosen by scope
/// kind, and the acting user id is attached only for per-user scopes.
pub struct FieldAccessor<F> {
    fields: F,
    scope_ids: ScopeIds,
}

impl<F: FieldStore> FieldAccessor<F> {
    /// Bind a field store to a block identity.
    pub fn new(fields: F, scope_ids: ScopeIds) -> Self {
        Self { fields, scope_ids }
    }

    /// The identity this accessor scopes by.
    pub fn scope_ids(&self) -> &ScopeIds {
        &self.scope_ids
    }

    /// Derive the scope key for one field of this block.
    pub fn key(&self, field_scope: FieldScope, field_name: &str) -> ScopeKey {
        let block_scope_id = match field_scope.scope {
            Scope::Children | Scope::Parent | Scope::Usage => {
                Some(self.scope_ids.usage_id.as_str().to_string())
            }
            Scope::Definition => Some(self.scope_ids.definition_id.as_str().to_string()),
            Scope::Type => Some(self.scope_ids.block_type.clone()),
            Scope::All => None,
        };
        let user_id = if field_scope.per_user {
            self.scope_ids.user_id.clone()
        } else {
            None
        };

        ScopeKey {
            scope: field_scope.scope,
            block_scope_id,
            user_id,
            field_name: field_name.to_string(),
        }
    }

    /// Retrieve a field value.
    pub fn get(&mut self, field_scope: FieldScope, field_name: &str) -> Result<JsonValue> {
        let key = self.key(field_scope, field_name);
        Ok(self.fields.get(&key)?)
    }

    /// Store a field value, overwriting any previous value.
    pub fn set(
        &mut self,
        field_scope: FieldScope,
        field_name: &str,
        value: JsonValue,
    ) -> Result<()> {
        let key = self.key(field_scope, field_name);
        Ok(self.fields.set(&key, value)?)
    }

    /// Remove a field value. A no-op if the field was never set.
    pub fn delete(&mut self, field_scope: FieldScope, field_name: &str) -> Result<()> {
        let key = self.key(field_scope, field_name);
        Ok(self.fields.delete(&key)?)
    }

    /// Whether a field value is stored.
    pub fn has(&mut self, field_scope: FieldScope, field_name: &str) -> Result<bool> {
        let key = self.key(field_scope, field_name);
        Ok(self.fields.has(&key)?)
    }

    /// Retrieve a field value, or `None` when it was never set.
    ///
    /// Convenience over `get` for callers that fall back to a default.
    pub fn get_opt(
        &mut self,
        field_scope: FieldScope,
        field_name: &str,
    ) -> Result<Option<JsonValue>> {
        match self.get(field_scope, field_name) {
            Ok(value) => Ok(Some(value)),
            Err(crate::RuntimeError::Fields(FieldError::NotFound { .. })) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// The component-construction capability.
///
/// Supplied by the component framework: given a block type and the scoped
/// field accessor for one block, build the component instance. Factories
/// that do not recognize the type fail with
/// `RuntimeError::UnknownBlockType`.
pub trait BlockFactory<F: FieldStore> {
    /// The component instance type this factory produces.
    type Block;

    /// Build a block of `block_type` wired to `fields`.
    fn construct_block(
        &mut self,
        block_type: &str,
        fields: FieldAccessor<F>,
    ) -> Result<Self::Block>;
}
