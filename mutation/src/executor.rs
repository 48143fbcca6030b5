//! Mutation executor - coordinates mutation dispatch.
//!
//! Holds the single mutable store borrow for the duration of one
//! mutation, which serializes mutations relative to each other: no
//! operation in this core suspends, so each runs to completion
//! atomically with respect to other logical operations.

use fable_core::{Arguments, Entity};
use fable_registry::MutationRootResolver;
use fable_store::EntityStore;

use crate::error::MutationResult;

/// Mutation executor.
pub struct MutationExecutor<'g> {
    store: &'g mut EntityStore,
}

impl<'g> MutationExecutor<'g> {
    /// Create a new executor.
    pub fn new(store: &'g mut EntityStore) -> Self {
        Self { store }
    }

    /// Dispatch one mutation root resolver with its arguments.
    ///
    /// Returns the updated entity, which becomes the parent value for
    /// resolving the operation's requested output fields.
    pub fn execute(
        &mut self,
        resolver: MutationRootResolver,
        arguments: &Arguments,
    ) -> MutationResult<Entity> {
        let entity = resolver(self.store, arguments)?;
        Ok(entity)
    }
}
