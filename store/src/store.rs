//! Core entity storage implementation.

use fable_core::{Author, AuthorId, Post, PostId, StoreError, StoreResult};

/// The in-memory entity storage.
///
/// Both collections keep insertion order; queries over them are required
/// to be stable and deterministic across calls. Lookups are linear scans:
/// the collections are small and unordered by id, and id uniqueness
/// guarantees at most one match.
#[derive(Debug, Default)]
pub struct EntityStore {
    /// Author storage, insertion-ordered.
    authors: Vec<Author>,
    /// Post storage, insertion-ordered.
    posts: Vec<Post>,
}

impl EntityStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given collections.
    ///
    /// Callers are responsible for id uniqueness. Referential integrity is
    /// not checked here; a post with a dangling `author_id` will surface as
    /// an error when its author relationship is resolved.
    pub fn with_data(authors: Vec<Author>, posts: Vec<Post>) -> Self {
        Self { authors, posts }
    }

    /// Create a store seeded with the fixed initial data set.
    pub fn seeded() -> Self {
        Self::with_data(
            vec![
                Author::new(AuthorId::new(1), "Tom", "Coleman"),
                Author::new(AuthorId::new(2), "Sashko", "Stubailo"),
                Author::new(AuthorId::new(3), "Mikhail", "Novikov"),
            ],
            vec![
                Post::new(PostId::new(1), AuthorId::new(1), "Introduction to GraphQL", 2),
                Post::new(PostId::new(2), AuthorId::new(2), "Welcome to Meteor", 3),
                Post::new(PostId::new(3), AuthorId::new(2), "Advanced GraphQL", 1),
                Post::new(PostId::new(4), AuthorId::new(3), "Launchpad is Cool", 7),
            ],
        )
    }

    // ==================== Read Operations ====================

    /// Get an author by id.
    pub fn author_by_id(&self, id: AuthorId) -> StoreResult<&Author> {
        self.authors
            .iter()
            .find(|author| author.id == id)
            .ok_or(StoreError::AuthorNotFound(id))
    }

    /// All posts in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts belonging to an author, preserving relative order.
    ///
    /// An author with no posts yields an empty sequence; absence of the
    /// relation is a valid, non-error state.
    pub fn posts_by_author(&self, author_id: AuthorId) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.author_id == author_id)
            .collect()
    }

    /// Get a post by id.
    pub fn post_by_id(&self, id: PostId) -> StoreResult<&Post> {
        self.posts
            .iter()
            .find(|post| post.id == id)
            .ok_or(StoreError::PostNotFound(id))
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    // ==================== Mutation ====================

    /// Increment a post's vote count by exactly 1 and return the updated
    /// record.
    ///
    /// This is the only mutating operation in the system. On a miss the
    /// store is left unmodified.
    pub fn increment_votes(&mut self, id: PostId) -> StoreResult<Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::PostNotFound(id))?;
        post.votes += 1;
        Ok(post.clone())
    }

    // ==================== Statistics ====================

    /// Number of authors in the store.
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Number of posts in the store.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
