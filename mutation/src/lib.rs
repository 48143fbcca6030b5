//! Fable Mutation Dispatcher
//!
//! Validates mutation arguments, applies exactly one state change through
//! the entity store, and hands the updated entity back for output shaping.
//! The dispatcher is the only component that borrows the store mutably.

mod error;
mod executor;
mod ops;

pub use error::*;
pub use executor::*;
pub use ops::*;
