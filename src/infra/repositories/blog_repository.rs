//! Blog repository - CRUD operations over blog documents.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, BlogOwner, BlogWithOwner, NewBlog};
use crate::errors::AppResult;
use crate::infra::store::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Blog repository trait for dependency injection.
///
/// Absence is surfaced as `None` rather than an error; status code
/// decisions belong to the API layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// List every blog with its owner reference expanded
    async fn list_all_with_owner(&self) -> AppResult<Vec<BlogWithOwner>>;

    /// Find a blog by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>>;

    /// Persist a new blog, assigning its id
    async fn insert(&self, blog: NewBlog) -> AppResult<Blog>;

    /// Replace the likes count of an existing blog, returning the updated
    /// blog or `None` if no blog has that id
    async fn update_likes(&self, id: Uuid, likes: u32) -> AppResult<Option<Blog>>;

    /// Remove a blog if present; an absent id is a silent success
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

/// Document-store-backed blog repository
pub struct BlogStore {
    store: Arc<MemoryStore>,
}

impl BlogStore {
    /// Create a repository over the given store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BlogRepository for BlogStore {
    async fn list_all_with_owner(&self) -> AppResult<Vec<BlogWithOwner>> {
        let blogs: Vec<Blog> = {
            let guard = self.store.blogs.read().await;
            guard.iter().cloned().collect()
        };

        // Batch-fetch the referenced owners, then project {id, username, name}
        let owner_ids: HashSet<Uuid> = blogs.iter().map(|b| b.user).collect();
        let owners: HashMap<Uuid, BlogOwner> = {
            let guard = self.store.users.read().await;
            owner_ids
                .into_iter()
                .filter_map(|id| {
                    guard.get(&id).map(|user| {
                        (
                            id,
                            BlogOwner {
                                id: user.id,
                                username: user.username.clone(),
                                name: user.name.clone(),
                            },
                        )
                    })
                })
                .collect()
        };

        let mut expanded = Vec::with_capacity(blogs.len());
        for blog in blogs {
            match owners.get(&blog.user) {
                Some(owner) => expanded.push(BlogWithOwner::new(blog, owner.clone())),
                None => {
                    // Users are never deleted, so a dangling owner reference
                    // indicates store corruption; skip the document.
                    tracing::warn!(blog_id = %blog.id, "blog references missing owner");
                }
            }
        }

        Ok(expanded)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>> {
        let guard = self.store.blogs.read().await;
        Ok(guard.get(&id).cloned())
    }

    async fn insert(&self, blog: NewBlog) -> AppResult<Blog> {
        let blog = Blog {
            id: Uuid::new_v4(),
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: blog.user,
        };

        let mut guard = self.store.blogs.write().await;
        guard.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn update_likes(&self, id: Uuid, likes: u32) -> AppResult<Option<Blog>> {
        let mut guard = self.store.blogs.write().await;
        match guard.get_mut(&id) {
            Some(blog) => {
                blog.likes = likes;
                Ok(Some(blog.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let mut guard = self.store.blogs.write().await;
        // Idempotent: removing an absent id still reports success. The
        // owner's blogs list keeps a stale reference; user listings skip it.
        guard.remove(&id);
        Ok(())
    }
}
