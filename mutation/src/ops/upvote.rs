//! The upvotePost operation.

use fable_core::{Arguments, Entity, PostId};
use fable_registry::ResolverResult;
use fable_store::EntityStore;

/// `Mutation.upvotePost(postId)` - increment a post's vote count by
/// exactly 1 and return the updated post for output shaping.
///
/// `postId` must be present and an integer. A missing post fails with
/// not-found carrying the id; the store is left unmodified. Matches the
/// `MutationRootResolver` signature for registry registration.
pub fn upvote_post(store: &mut EntityStore, arguments: &Arguments) -> ResolverResult<Entity> {
    let post_id = PostId::new(arguments.int("postId")?);
    let updated = store.increment_votes(post_id)?;
    Ok(Entity::Post(updated))
}
