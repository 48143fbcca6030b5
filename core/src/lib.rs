//! Fable Core Types
//!
//! This crate provides the foundational types used throughout the fable
//! engine:
//! - Identity types (AuthorId, PostId)
//! - Entity records (Author, Post) and the Entity sum type
//! - The Value output type and Arguments
//! - Operation input types (the parsed shape handed over by the transport)
//! - Common error types

mod entity;
mod error;
mod id;
mod operation;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use operation::*;
pub use value::*;
