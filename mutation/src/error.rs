//! Mutation error types.

use fable_core::{ArgumentError, StoreError};
use fable_registry::ResolverError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation dispatch.
#[derive(Debug, Error, PartialEq)]
pub enum MutationError {
    /// The referenced entity does not exist; the store is left
    /// unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A mutation argument was missing or malformed.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// A mutation root resolver was handed the wrong parent. Cannot
    /// happen through the dispatcher, kept for signature completeness.
    #[error("{0}")]
    Resolver(String),
}

impl From<ResolverError> for MutationError {
    fn from(e: ResolverError) -> Self {
        match e {
            ResolverError::Store(store) => Self::Store(store),
            ResolverError::Argument(argument) => Self::Argument(argument),
            other => Self::Resolver(other.to_string()),
        }
    }
}
