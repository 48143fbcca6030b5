//! Fable Entity Store
//!
//! The store is the sole owner of the in-memory author and post
//! collections and the only component permitted to mutate them. Every
//! other component reads through `&EntityStore` per call.

mod store;

pub use store::*;
