//! Common error types for fable.

use crate::{AuthorId, PostId};
use thiserror::Error;

/// Errors that can occur during entity store operations.
///
/// A missing entity on direct id lookup is always a signaled error;
/// one-to-many relationship lookups return empty sequences instead and
/// never produce these.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No author with the given id.
    #[error("Couldn't find author with id {0}")]
    AuthorNotFound(AuthorId),

    /// No post with the given id.
    #[error("Couldn't find post with id {0}")]
    PostNotFound(PostId),
}

/// Result type for entity store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors for malformed or missing operation arguments.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    /// A required argument was not supplied.
    #[error("Missing required argument: {name}")]
    Missing { name: String },

    /// An argument had the wrong scalar kind.
    #[error("Invalid argument {name}: expected {expected}, got {actual}")]
    WrongKind {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}
