//! Blog schema registration.
//!
//! The explicit startup step enumerating every (type, field) pair the
//! schema answers. Dispatch stays a statically-typed table: adding a
//! field means adding a resolver function and one registration line here.

use fable_core::TypeTag;
use fable_mutation::upvote_post;
use fable_registry::{Registry, RegistryBuilder, RegistryResult};
use fable_resolve::{author_posts_field, post_author_field, query_author, query_posts};

/// Build the registry for the blog schema.
///
/// Roots: `Query.posts`, `Query.author(id)`, `Mutation.upvotePost(postId)`.
/// Relationships: `Author.posts`, `Post.author`.
pub fn build_registry() -> RegistryResult<Registry> {
    let mut builder = RegistryBuilder::new();
    builder
        .query_root("posts", query_posts)?
        .query_root("author", query_author)?
        .mutation_root("upvotePost", upvote_post)?
        .field(TypeTag::Author, "posts", author_posts_field)?
        .field(TypeTag::Post, "author", post_author_field)?;
    Ok(builder.build())
}
