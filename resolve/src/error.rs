//! Resolution error types.

use fable_core::TypeTag;
use fable_registry::{RegistryError, ResolverError};
use thiserror::Error;

/// Result type for field resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving a selection tree.
///
/// Any of these aborts the whole operation; partial results are never
/// returned.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    /// Registry had no resolver for a requested field.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A resolver failed: missing entity on direct lookup, or a
    /// malformed argument.
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// A relationship field resolved to an object or sequence but the
    /// request carried no nested selection to shape it with.
    #[error("Field {field} on type {type_tag} resolves to an object and requires a nested selection")]
    MissingSelection { type_tag: TypeTag, field: String },

    /// The request nested a selection under a stored scalar field.
    #[error("Field {field} on type {type_tag} is a scalar and cannot have a nested selection")]
    SelectionOnScalar { type_tag: TypeTag, field: String },
}

impl ResolveError {
    pub fn missing_selection(type_tag: TypeTag, field: impl Into<String>) -> Self {
        Self::MissingSelection {
            type_tag,
            field: field.into(),
        }
    }

    pub fn selection_on_scalar(type_tag: TypeTag, field: impl Into<String>) -> Self {
        Self::SelectionOnScalar {
            type_tag,
            field: field.into(),
        }
    }
}
