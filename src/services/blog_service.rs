//! Blog service - Blog use cases, including the authenticated
//! creation workflow.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Blog, BlogWithOwner, CreateBlog, NewBlog};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{BlogRepository, UserRepository};
use crate::services::auth_service::{bearer_token, AuthService};

/// Blog service trait for dependency injection.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Create a blog for the caller identified by the Authorization header.
    ///
    /// Fails with a 401-category error before any write if the header is
    /// missing, the token does not verify, or the token's user does not
    /// exist.
    async fn create_blog(&self, auth_header: Option<String>, payload: CreateBlog)
        -> AppResult<Blog>;

    /// List every blog with its owner expanded
    async fn list_blogs(&self) -> AppResult<Vec<BlogWithOwner>>;

    /// Get a single blog by id
    async fn get_blog(&self, id: Uuid) -> AppResult<Blog>;

    /// Replace the likes count of an existing blog
    async fn update_likes(&self, id: Uuid, likes: u32) -> AppResult<Blog>;

    /// Delete a blog; deleting an absent id still succeeds
    async fn delete_blog(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BlogService.
pub struct BlogManager {
    blogs: Arc<dyn BlogRepository>,
    users: Arc<dyn UserRepository>,
    auth: Arc<dyn AuthService>,
}

impl BlogManager {
    /// Create new blog service instance
    pub fn new(
        blogs: Arc<dyn BlogRepository>,
        users: Arc<dyn UserRepository>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self { blogs, users, auth }
    }
}

#[async_trait]
impl BlogService for BlogManager {
    async fn create_blog(
        &self,
        auth_header: Option<String>,
        payload: CreateBlog,
    ) -> AppResult<Blog> {
        // Extract and verify the bearer token
        let token = bearer_token(auth_header.as_deref()).ok_or(AppError::Unauthorized)?;
        let claims = self.auth.verify_token(token)?;

        // Resolve the owner; a token naming a nonexistent user is an
        // authentication failure, not a 404
        let owner = match self.users.find_by_id(claims.sub).await? {
            Some(user) => user,
            None => {
                tracing::debug!(user_id = %claims.sub, "token references unknown user");
                return Err(AppError::Unauthorized);
            }
        };

        // Persist the blog first; the owner update below needs its id
        let blog = self
            .blogs
            .insert(NewBlog {
                title: payload.title,
                author: payload.author,
                url: payload.url,
                likes: payload.likes.unwrap_or(0),
                user: owner.id,
            })
            .await?;

        // Not transactional: if this append fails the blog stays persisted
        // and retrievable, only the owner's listing misses it
        self.users.append_blog(owner.id, blog.id).await?;

        tracing::debug!(blog_id = %blog.id, owner = %owner.id, "blog created");
        Ok(blog)
    }

    async fn list_blogs(&self) -> AppResult<Vec<BlogWithOwner>> {
        self.blogs.list_all_with_owner().await
    }

    async fn get_blog(&self, id: Uuid) -> AppResult<Blog> {
        self.blogs.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_likes(&self, id: Uuid, likes: u32) -> AppResult<Blog> {
        self.blogs.update_likes(id, likes).await?.ok_or_not_found()
    }

    async fn delete_blog(&self, id: Uuid) -> AppResult<()> {
        self.blogs.delete_by_id(id).await
    }
}
