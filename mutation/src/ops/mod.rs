//! Mutation operations.
//!
//! One module per operation; the schema currently exposes a single
//! mutation, `upvotePost`.

mod upvote;

pub use upvote::*;
