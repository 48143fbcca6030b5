//! Selection-tree execution.

use fable_core::{Arguments, Entity, FieldSelection, SelectionSet, TypeTag, Value};
use fable_registry::{Registry, Resolved};
use fable_store::EntityStore;

use crate::{ResolveError, ResolveResult};

/// The field resolution engine.
///
/// Borrows the registry and a read-only view of the store for the duration
/// of one operation. Resolution runs to completion synchronously; errors
/// abort the whole operation with no partial result.
pub struct Executor<'r, 'g> {
    registry: &'r Registry,
    store: &'g EntityStore,
}

impl<'r, 'g> Executor<'r, 'g> {
    /// Create a new executor.
    pub fn new(registry: &'r Registry, store: &'g EntityStore) -> Self {
        Self { registry, store }
    }

    /// Resolve a query root field and shape its result against the
    /// requested selection.
    pub fn resolve_query(
        &self,
        root_field: &str,
        arguments: &Arguments,
        selection: &SelectionSet,
    ) -> ResolveResult<Value> {
        let resolver = self.registry.query_root(root_field)?;
        let resolved = resolver(self.store, arguments)?;
        self.shape_resolved(TypeTag::Query, root_field, resolved, Some(selection))
    }

    /// Shape an already-resolved entity against a selection.
    ///
    /// Used directly for mutation output: the dispatcher hands over the
    /// updated entity and the caller shapes whatever fields were requested.
    pub fn shape(&self, entity: &Entity, selection: &SelectionSet) -> ResolveResult<Value> {
        let owning_type = entity.type_tag();
        let mut fields = Vec::with_capacity(selection.fields().len());

        for requested in selection.fields() {
            let value = self.resolve_field(entity, owning_type, requested)?;
            fields.push((requested.name.clone(), value));
        }

        Ok(Value::Object(fields))
    }

    /// Resolve one requested field of a parent entity.
    fn resolve_field(
        &self,
        parent: &Entity,
        owning_type: TypeTag,
        requested: &FieldSelection,
    ) -> ResolveResult<Value> {
        // Stored scalar attributes are read directly off the parent.
        if let Some(value) = parent.scalar(&requested.name) {
            if requested.selection.is_some() {
                return Err(ResolveError::selection_on_scalar(
                    owning_type,
                    &requested.name,
                ));
            }
            return Ok(value);
        }

        // Relationship fields dispatch through the registry. Nested fields
        // of this schema declare no arguments, so resolvers receive an
        // empty argument list.
        let resolver = self.registry.field_resolver(owning_type, &requested.name)?;
        let resolved = resolver(self.store, parent, &Arguments::new())?;
        self.shape_resolved(
            owning_type,
            &requested.name,
            resolved,
            requested.selection.as_ref(),
        )
    }

    /// Shape a resolver result against the field's nested selection.
    fn shape_resolved(
        &self,
        owning_type: TypeTag,
        field: &str,
        resolved: Resolved,
        selection: Option<&SelectionSet>,
    ) -> ResolveResult<Value> {
        match resolved {
            Resolved::Missing => Ok(Value::Null),
            Resolved::Entity(entity) => {
                let selection = selection
                    .ok_or_else(|| ResolveError::missing_selection(owning_type, field))?;
                self.shape(&entity, selection)
            }
            Resolved::Entities(entities) => {
                let selection = selection
                    .ok_or_else(|| ResolveError::missing_selection(owning_type, field))?;
                let shaped = entities
                    .iter()
                    .map(|entity| self.shape(entity, selection))
                    .collect::<ResolveResult<Vec<Value>>>()?;
                Ok(Value::List(shaped))
            }
        }
    }
}
