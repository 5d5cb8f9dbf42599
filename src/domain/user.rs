//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::blog::BlogSummary;

/// User domain entity.
///
/// `blogs` holds references to owned blog posts and grows only by append
/// when a blog this user authored is created. The password hash is never
/// serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Identifiers of blogs authored by this user, in creation order
    pub blogs: Vec<Uuid>,
}

impl User {
    /// Create a new user with no blogs yet (id is assigned by the store)
    pub fn new(id: Uuid, username: String, name: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            name,
            password_hash,
            blogs: Vec::new(),
        }
    }

    /// Record ownership of a newly created blog
    pub fn append_blog(&mut self, blog_id: Uuid) {
        self.blogs.push(blog_id);
    }
}

/// User with `blogs` expanded to embedded blog projections
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserWithBlogs {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogSummary>,
}
