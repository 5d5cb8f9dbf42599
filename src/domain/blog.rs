//! Blog domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Blog domain entity.
///
/// A blog always has exactly one owner, fixed at creation and never
/// reassigned. Only `likes` is mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
    /// Identifier of the owning user
    pub user: Uuid,
}

/// Data for a blog about to be persisted (id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
    pub user: Uuid,
}

/// Blog creation payload.
///
/// The owner is always the user resolved from the bearer token; any
/// client-supplied id or owner field is ignored by deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBlog {
    /// Blog title
    #[validate(length(min = 1, message = "title is required"))]
    #[schema(example = "Go To Statement Considered Harmful")]
    pub title: String,
    /// Author display name (free text, independent of the owning user)
    #[validate(length(min = 1, message = "author is required"))]
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: String,
    /// Blog URL
    #[validate(length(min = 1, message = "url is required"))]
    #[schema(example = "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf")]
    pub url: String,
    /// Number of likes (defaults to 0 when omitted)
    #[schema(example = 4)]
    pub likes: Option<u32>,
}

/// Likes update payload for `PUT /blogs/{id}`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBlogLikes {
    /// New likes count
    #[schema(example = 4)]
    pub likes: u32,
}

/// Owning user projection embedded in blog listings.
///
/// Exposes only the owner's id, username, and name; never password material.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogOwner {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

/// Blog with its `user` reference expanded to an owner projection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogWithOwner {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
    pub user: BlogOwner,
}

impl BlogWithOwner {
    /// Join a blog with its owner projection
    pub fn new(blog: Blog, user: BlogOwner) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user,
        }
    }
}

/// Blog projection embedded in user listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogSummary {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
}

impl From<&Blog> for BlogSummary {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
        }
    }
}
