//! RegistryBuilder for constructing an immutable Registry.

use crate::{
    FieldResolver, MutationRootResolver, QueryRootResolver, Registry, RegistryError,
    RegistryResult,
};
use fable_core::{OperationKind, TypeTag};
use std::collections::HashMap;

/// Builder for constructing an immutable Registry.
///
/// Registration is the explicit startup step enumerating every
/// (type, field) pair the schema answers; duplicates are build errors.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Field resolvers being registered.
    fields: HashMap<(TypeTag, String), FieldResolver>,
    /// Query root resolvers being registered.
    query_roots: HashMap<String, QueryRootResolver>,
    /// Mutation root resolvers being registered.
    mutation_roots: HashMap<String, MutationRootResolver>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a relationship field resolver under (owning type, field).
    pub fn field(
        &mut self,
        type_tag: TypeTag,
        field: impl Into<String>,
        resolver: FieldResolver,
    ) -> RegistryResult<&mut Self> {
        let field = field.into();
        if self.fields.contains_key(&(type_tag, field.clone())) {
            return Err(RegistryError::DuplicateField { type_tag, field });
        }
        self.fields.insert((type_tag, field), resolver);
        Ok(self)
    }

    /// Register a query root resolver.
    pub fn query_root(
        &mut self,
        field: impl Into<String>,
        resolver: QueryRootResolver,
    ) -> RegistryResult<&mut Self> {
        let field = field.into();
        if self.query_roots.contains_key(&field) {
            return Err(RegistryError::DuplicateRootField {
                kind: OperationKind::Query,
                field,
            });
        }
        self.query_roots.insert(field, resolver);
        Ok(self)
    }

    /// Register a mutation root resolver.
    pub fn mutation_root(
        &mut self,
        field: impl Into<String>,
        resolver: MutationRootResolver,
    ) -> RegistryResult<&mut Self> {
        let field = field.into();
        if self.mutation_roots.contains_key(&field) {
            return Err(RegistryError::DuplicateRootField {
                kind: OperationKind::Mutation,
                field,
            });
        }
        self.mutation_roots.insert(field, resolver);
        Ok(self)
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry::new(self.fields, self.query_roots, self.mutation_roots)
    }
}
