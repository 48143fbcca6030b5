//! Fable Field Resolution Engine
//!
//! Walks a requested selection tree, dispatches each field to the correct
//! resolver through the registry, recurses into nested object fields, and
//! assembles a single result whose shape mirrors the request exactly.
//!
//! This crate also hosts the read-only resolvers of the blog schema: the
//! query root resolvers and the relationship resolvers for `Author.posts`
//! and `Post.author`.

mod error;
mod executor;
mod resolvers;

pub use error::*;
pub use executor::*;
pub use resolvers::*;
