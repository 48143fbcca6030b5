//! Entity records for fable.
//!
//! Authors and posts are explicit tagged record types with fixed fields.
//! Relationship fields (an author's posts, a post's author) are never stored
//! on the record itself; they are derived on demand by resolvers.

use crate::{AuthorId, PostId, Value};

/// Tag identifying the owning type during field resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Query,
    Mutation,
    Author,
    Post,
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Query => write!(f, "Query"),
            TypeTag::Mutation => write!(f, "Mutation"),
            TypeTag::Author => write!(f, "Author"),
            TypeTag::Post => write!(f, "Post"),
        }
    }
}

/// An author record.
///
/// Immutable after seeding: no exposed operation creates, updates, or
/// deletes authors.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    /// Unique identifier for this author.
    pub id: AuthorId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Author {
    /// Create a new author record.
    pub fn new(id: AuthorId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Read a stored scalar field by its schema name.
    pub fn scalar(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Int(self.id.raw())),
            "firstName" => Some(Value::String(self.first_name.clone())),
            "lastName" => Some(Value::String(self.last_name.clone())),
            _ => None,
        }
    }
}

/// A post record.
///
/// `author_id` must reference an existing author. Only `votes` is mutable,
/// and only through the upvote operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Unique identifier for this post.
    pub id: PostId,
    /// The author this post belongs to.
    pub author_id: AuthorId,
    /// Post title.
    pub title: String,
    /// Vote count, never negative.
    pub votes: i64,
}

impl Post {
    /// Create a new post record.
    pub fn new(id: PostId, author_id: AuthorId, title: impl Into<String>, votes: i64) -> Self {
        Self {
            id,
            author_id,
            title: title.into(),
            votes,
        }
    }

    /// Read a stored scalar field by its schema name.
    pub fn scalar(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Int(self.id.raw())),
            "authorId" => Some(Value::Int(self.author_id.raw())),
            "title" => Some(Value::String(self.title.clone())),
            "votes" => Some(Value::Int(self.votes)),
            _ => None,
        }
    }
}

/// A resolved entity of either kind, tagged with its type.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Author(Author),
    Post(Post),
}

impl Entity {
    /// The type tag carried into nested field resolution.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Entity::Author(_) => TypeTag::Author,
            Entity::Post(_) => TypeTag::Post,
        }
    }

    /// Read a stored scalar field by its schema name.
    pub fn scalar(&self, field: &str) -> Option<Value> {
        match self {
            Entity::Author(author) => author.scalar(field),
            Entity::Post(post) => post.scalar(field),
        }
    }

    /// Get as an author if this is an author.
    pub fn as_author(&self) -> Option<&Author> {
        match self {
            Entity::Author(author) => Some(author),
            Entity::Post(_) => None,
        }
    }

    /// Get as a post if this is a post.
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Entity::Author(_) => None,
            Entity::Post(post) => Some(post),
        }
    }
}

impl From<Author> for Entity {
    fn from(author: Author) -> Self {
        Entity::Author(author)
    }
}

impl From<Post> for Entity {
    fn from(post: Post) -> Self {
        Entity::Post(post)
    }
}
