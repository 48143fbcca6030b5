//! Resolvers of the blog schema: query roots and relationship fields.
//!
//! All resolvers here are pure with respect to external state: they read
//! through the store, never write. Each typed resolver is paired with an
//! adapter matching the registry's function signatures, so the schema
//! registration step can enumerate them as plain `fn` pointers.

use fable_core::{Arguments, Author, AuthorId, Entity, Post, StoreResult, TypeTag};
use fable_registry::{Resolved, ResolverError, ResolverResult};
use fable_store::EntityStore;

// ==================== Query Roots ====================

/// `Query.posts` - the full post listing in store order.
pub fn query_posts(store: &EntityStore, _arguments: &Arguments) -> ResolverResult<Resolved> {
    let posts: Vec<Entity> = store
        .posts()
        .iter()
        .cloned()
        .map(Entity::Post)
        .collect();
    Ok(Resolved::Entities(posts))
}

/// `Query.author(id)` - direct author lookup.
///
/// A missing id is a signaled error, never a silent null.
pub fn query_author(store: &EntityStore, arguments: &Arguments) -> ResolverResult<Resolved> {
    let id = AuthorId::new(arguments.int("id")?);
    let author = store.author_by_id(id)?;
    Ok(Resolved::Entity(Entity::Author(author.clone())))
}

// ==================== Relationship Resolvers ====================

/// `Author.posts` - the posts written by an author.
///
/// An author with no posts is a valid state and yields an empty
/// sequence, never an error.
pub fn author_posts(store: &EntityStore, author: &Author) -> Vec<Post> {
    store
        .posts_by_author(author.id)
        .into_iter()
        .cloned()
        .collect()
}

/// `Post.author` - the author a post belongs to.
///
/// The `author_id` invariant guarantees the author exists; a miss here
/// means a broken foreign key and propagates as an error rather than
/// degrading to null.
pub fn post_author(store: &EntityStore, post: &Post) -> StoreResult<Author> {
    store.author_by_id(post.author_id).cloned()
}

// ==================== Registry Adapters ====================

/// Adapter for `Author.posts` matching the `FieldResolver` signature.
pub fn author_posts_field(
    store: &EntityStore,
    parent: &Entity,
    _arguments: &Arguments,
) -> ResolverResult<Resolved> {
    let author = expect_author(parent)?;
    let posts: Vec<Entity> = author_posts(store, author)
        .into_iter()
        .map(Entity::Post)
        .collect();
    Ok(Resolved::Entities(posts))
}

/// Adapter for `Post.author` matching the `FieldResolver` signature.
pub fn post_author_field(
    store: &EntityStore,
    parent: &Entity,
    _arguments: &Arguments,
) -> ResolverResult<Resolved> {
    let post = expect_post(parent)?;
    let author = post_author(store, post)?;
    Ok(Resolved::Entity(Entity::Author(author)))
}

fn expect_author(parent: &Entity) -> ResolverResult<&Author> {
    parent.as_author().ok_or(ResolverError::UnexpectedParent {
        expected: TypeTag::Author,
        actual: parent.type_tag(),
    })
}

fn expect_post(parent: &Entity) -> ResolverResult<&Post> {
    parent.as_post().ok_or(ResolverError::UnexpectedParent {
        expected: TypeTag::Post,
        actual: parent.type_tag(),
    })
}
