//! Session error types.

use fable_mutation::MutationError;
use fable_registry::RegistryError;
use fable_resolve::ResolveError;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The single error an operation can surface to the caller.
///
/// Leaf failures propagate up unmodified; there is no local recovery or
/// retry, and no partial data accompanies a failed operation.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// Field resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Mutation dispatch failed.
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// No root resolver for the operation's root field.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
