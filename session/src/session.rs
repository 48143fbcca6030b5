//! Session manager.

use fable_core::{Operation, OperationKind, Value};
use fable_mutation::MutationExecutor;
use fable_registry::Registry;
use fable_resolve::Executor;
use fable_store::EntityStore;

use crate::error::SessionResult;

/// A fable session.
///
/// Owns the entity store for its lifetime and borrows the shared,
/// immutable registry. Each `execute` call resolves exactly one root
/// field and returns one value or one error.
pub struct Session<'r> {
    /// The registry (shared, immutable after startup).
    registry: &'r Registry,
    /// Session-owned entity store.
    store: EntityStore,
}

impl<'r> Session<'r> {
    /// Create a session over the seeded data set.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            store: EntityStore::seeded(),
        }
    }

    /// Create a session with an existing store.
    pub fn with_store(registry: &'r Registry, store: EntityStore) -> Self {
        Self { registry, store }
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Execute one parsed operation.
    ///
    /// Queries resolve against a read-only store borrow. Mutations first
    /// apply their single state change through the dispatcher, then shape
    /// the updated entity against the requested selection, so the output
    /// reflects the already-applied side effect.
    pub fn execute(&mut self, operation: &Operation) -> SessionResult<Value> {
        match operation.kind {
            OperationKind::Query => {
                let executor = Executor::new(self.registry, &self.store);
                let value = executor.resolve_query(
                    &operation.root_field,
                    &operation.arguments,
                    &operation.selection,
                )?;
                Ok(value)
            }
            OperationKind::Mutation => {
                let resolver = self.registry.mutation_root(&operation.root_field)?;
                let updated = MutationExecutor::new(&mut self.store)
                    .execute(resolver, &operation.arguments)?;
                let executor = Executor::new(self.registry, &self.store);
                let value = executor.shape(&updated, &operation.selection)?;
                Ok(value)
            }
        }
    }
}
