//! Resolver function signatures and results.

use fable_core::{ArgumentError, Arguments, Entity, StoreError, TypeTag};
use fable_store::EntityStore;
use thiserror::Error;

/// What a resolver produced, before the engine shapes it against the
/// requested selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A single entity.
    Entity(Entity),
    /// An ordered sequence of entities.
    Entities(Vec<Entity>),
    /// No entity. Shaped as null without recursing into the nested
    /// selection. Direct id lookups signal an error instead of returning
    /// this; it exists for resolvers whose absence is a valid state.
    Missing,
}

impl Resolved {
    /// Returns true if this is a single-entity result.
    pub fn is_entity(&self) -> bool {
        matches!(self, Resolved::Entity(_))
    }

    /// Returns true if this is a sequence result.
    pub fn is_entities(&self) -> bool {
        matches!(self, Resolved::Entities(_))
    }
}

impl From<Entity> for Resolved {
    fn from(entity: Entity) -> Self {
        Resolved::Entity(entity)
    }
}

impl From<Vec<Entity>> for Resolved {
    fn from(entities: Vec<Entity>) -> Self {
        Resolved::Entities(entities)
    }
}

/// Errors a resolver function can produce.
///
/// Both families are terminal for the operation: a missing entity on
/// direct lookup, or a malformed argument.
#[derive(Debug, Error, PartialEq)]
pub enum ResolverError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// A field resolver was handed a parent entity of the wrong type.
    /// Indicates a mis-registered (type, field) pair.
    #[error("Resolver expected a {expected} parent, got {actual}")]
    UnexpectedParent { expected: TypeTag, actual: TypeTag },
}

/// Result type for resolver invocations.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Resolver for a relationship field: computes the field's value as a
/// function of the parent entity, reading through the store.
pub type FieldResolver = fn(&EntityStore, &Entity, &Arguments) -> ResolverResult<Resolved>;

/// Root resolver for a query field: obtains the base entity or entities
/// from the store.
pub type QueryRootResolver = fn(&EntityStore, &Arguments) -> ResolverResult<Resolved>;

/// Root resolver for a mutation field: validates arguments, applies
/// exactly one state change, and returns the updated entity for output
/// shaping. The only resolver kind holding a mutable store borrow.
pub type MutationRootResolver = fn(&mut EntityStore, &Arguments) -> ResolverResult<Entity>;
