//! Fable Session
//!
//! The coordination layer the transport talks to: wires the registry and
//! the entity store together, routes a parsed operation to the query or
//! mutation path, and returns a single result value or a single error.

mod error;
mod schema;
mod session;

pub use error::*;
pub use schema::*;
pub use session::*;
