//! The Registry - immutable resolver lookup.

use crate::{FieldResolver, MutationRootResolver, QueryRootResolver};
use fable_core::{OperationKind, TypeTag};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction or lookup.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// A resolver was registered twice for the same (type, field) pair.
    #[error("Duplicate resolver for {type_tag}.{field}")]
    DuplicateField { type_tag: TypeTag, field: String },

    /// A root resolver was registered twice for the same field.
    #[error("Duplicate {kind} root resolver for field {field}")]
    DuplicateRootField { kind: OperationKind, field: String },

    /// No resolver registered under (type, field).
    #[error("No resolver registered for {type_tag}.{field}")]
    UnknownField { type_tag: TypeTag, field: String },

    /// No root resolver registered for the operation's root field.
    #[error("No {kind} root resolver registered for field {field}")]
    UnknownRootField { kind: OperationKind, field: String },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// The Registry provides runtime lookup of resolver functions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Relationship field resolvers by (owning type, field name).
    fields: HashMap<(TypeTag, String), FieldResolver>,
    /// Query root resolvers by field name.
    query_roots: HashMap<String, QueryRootResolver>,
    /// Mutation root resolvers by field name.
    mutation_roots: HashMap<String, MutationRootResolver>,
}

impl Registry {
    pub(crate) fn new(
        fields: HashMap<(TypeTag, String), FieldResolver>,
        query_roots: HashMap<String, QueryRootResolver>,
        mutation_roots: HashMap<String, MutationRootResolver>,
    ) -> Self {
        Self {
            fields,
            query_roots,
            mutation_roots,
        }
    }

    /// Look up the resolver registered under (owning type, field name).
    pub fn field_resolver(&self, type_tag: TypeTag, field: &str) -> RegistryResult<FieldResolver> {
        self.fields
            .get(&(type_tag, field.to_string()))
            .copied()
            .ok_or_else(|| RegistryError::UnknownField {
                type_tag,
                field: field.to_string(),
            })
    }

    /// Returns true if a resolver is registered under (type, field).
    pub fn has_field(&self, type_tag: TypeTag, field: &str) -> bool {
        self.fields.contains_key(&(type_tag, field.to_string()))
    }

    /// Look up the root resolver for a query field.
    pub fn query_root(&self, field: &str) -> RegistryResult<QueryRootResolver> {
        self.query_roots
            .get(field)
            .copied()
            .ok_or_else(|| RegistryError::UnknownRootField {
                kind: OperationKind::Query,
                field: field.to_string(),
            })
    }

    /// Look up the root resolver for a mutation field.
    pub fn mutation_root(&self, field: &str) -> RegistryResult<MutationRootResolver> {
        self.mutation_roots
            .get(field)
            .copied()
            .ok_or_else(|| RegistryError::UnknownRootField {
                kind: OperationKind::Mutation,
                field: field.to_string(),
            })
    }

    /// Number of registered relationship field resolvers.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of registered root resolvers across both operation kinds.
    pub fn root_count(&self) -> usize {
        self.query_roots.len() + self.mutation_roots.len()
    }
}
