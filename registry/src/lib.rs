//! Fable Schema Registry
//!
//! The registry maps (owning type, field name) to statically-typed resolver
//! functions, and root operation names to root resolvers. It is built once
//! at startup through an explicit registration step and is immutable
//! afterwards; the field resolution engine consults it on every dispatch.

mod builder;
mod registry;
mod resolver;

pub use builder::*;
pub use registry::*;
pub use resolver::*;
