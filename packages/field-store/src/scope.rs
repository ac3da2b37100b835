//! Scope model and the storage-key codec.

use std::fmt;

/// The dimension along which a field value is partitioned.
///
/// A closed enumeration: `Children` and `Parent` address the block's
/// structural lists, while the remaining four variants classify where a
/// block-level field lives (its usage, its definition, its whole block
/// type, or shared across everything).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The block's list of child usages.
    Children,
    /// The block's parent usage.
    Parent,
    /// Data attached to one usage (one placement).
    Usage,
    /// Data attached to the definition, shared by all its usages.
    Definition,
    /// Data shared by every block of the same type.
    Type,
    /// Data shared regardless of block.
    All,
}

impl Scope {
    /// The root segment of the derived storage key.
    pub fn root_segment(&self) -> &'static str {
        match self {
            Scope::Children => "children",
            Scope::Parent => "parent",
            Scope::Usage => "usage",
            Scope::Definition => "definition",
            Scope::Type => "type",
            Scope::All => "all",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_segment())
    }
}

/// A field scope as declared by the component framework: a storage scope
/// plus whether values are kept per acting user.
///
/// The associated constants are the framework's well-known field scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldScope {
    /// Where the field lives.
    pub scope: Scope,
    /// Whether values are partitioned by acting user.
    pub per_user: bool,
}

impl FieldScope {
    /// Definition-scoped content, shared by all users.
    pub const CONTENT: FieldScope = FieldScope {
        scope: Scope::Definition,
        per_user: false,
    };

    /// Usage-scoped settings, shared by all users.
    pub const SETTINGS: FieldScope = FieldScope {
        scope: Scope::Usage,
        per_user: false,
    };

    /// Usage-scoped state for one user.
    pub const USER_STATE: FieldScope = FieldScope {
        scope: Scope::Usage,
        per_user: true,
    };

    /// Type-scoped preferences for one user.
    pub const PREFERENCES: FieldScope = FieldScope {
        scope: Scope::Type,
        per_user: true,
    };

    /// Information about one user, independent of any block.
    pub const USER_INFO: FieldScope = FieldScope {
        scope: Scope::All,
        per_user: true,
    };

    /// The block's child list.
    pub const CHILDREN: FieldScope = FieldScope {
        scope: Scope::Children,
        per_user: false,
    };

    /// The block's parent reference.
    pub const PARENT: FieldScope = FieldScope {
        scope: Scope::Parent,
        per_user: false,
    };
}

/// A description of where one field value lives.
///
/// Not persisted itself; `storage_key` derives the flat key the value is
/// stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    /// The scope kind.
    pub scope: Scope,
    /// The id of the scoping block entity: a usage id, a definition id, or
    /// a block type name, depending on `scope`. Absent for shared scopes.
    pub block_scope_id: Option<String>,
    /// The user the value belongs to, for per-user scopes.
    pub user_id: Option<String>,
    /// The field's name within the scope.
    pub field_name: String,
}

impl ScopeKey {
    /// Derive the flat storage key for this scope key.
    ///
    /// Segments are joined with `.`: the scope's root segment, then the
    /// block-scope id when present, then the user id when present and
    /// non-empty, then the field name. The encoding is injective as long
    /// as ids and field names never contain the `.` delimiter, which is a
    /// constraint on id generation rather than something enforced here -
    /// generated ids are plain hex and field names are identifiers.
    pub fn storage_key(&self) -> String {
        let mut segments: Vec<&str> = vec![self.scope.root_segment()];

        if let Some(id) = &self.block_scope_id {
            segments.push(id);
        }
        match &self.user_id {
            Some(user_id) if !user_id.is_empty() => segments.push(user_id),
            _ => {}
        }
        segments.push(&self.field_name);

        segments.join(".")
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
