//! User repository - operations over user documents.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogSummary, User, UserWithBlogs};
use crate::errors::{AppError, AppResult};
use crate::infra::store::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user with an empty blogs list, assigning its id
    async fn insert(&self, username: String, name: String, password_hash: String)
        -> AppResult<User>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List every user with `blogs` expanded to blog projections
    async fn list_all_with_blogs(&self) -> AppResult<Vec<UserWithBlogs>>;

    /// Append a blog reference to a user's blogs list
    async fn append_blog(&self, user_id: Uuid, blog_id: Uuid) -> AppResult<()>;
}

/// Document-store-backed user repository
pub struct UserStore {
    store: Arc<MemoryStore>,
}

impl UserStore {
    /// Create a repository over the given store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(
        &self,
        username: String,
        name: String,
        password_hash: String,
    ) -> AppResult<User> {
        let user = User::new(Uuid::new_v4(), username, name, password_hash);

        let mut guard = self.store.users.write().await;
        // Store-level uniqueness constraint on username
        if guard.iter().any(|other| other.username == user.username) {
            return Err(AppError::conflict("username"));
        }
        guard.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let guard = self.store.users.read().await;
        Ok(guard.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let guard = self.store.users.read().await;
        let found = guard.iter().find(|user| user.username == username).cloned();
        Ok(found)
    }

    async fn list_all_with_blogs(&self) -> AppResult<Vec<UserWithBlogs>> {
        let users: Vec<User> = {
            let guard = self.store.users.read().await;
            guard.iter().cloned().collect()
        };

        // Batch fetch, then project {title, author, url, likes} per reference.
        // Deleted blogs leave stale ids behind in `blogs`; skip them here.
        let blogs = self.store.blogs.read().await;
        let expanded = users
            .into_iter()
            .map(|user| UserWithBlogs {
                id: user.id,
                username: user.username,
                name: user.name,
                blogs: user
                    .blogs
                    .iter()
                    .filter_map(|id| blogs.get(id).map(BlogSummary::from))
                    .collect(),
            })
            .collect();

        Ok(expanded)
    }

    async fn append_blog(&self, user_id: Uuid, blog_id: Uuid) -> AppResult<()> {
        let mut guard = self.store.users.write().await;
        let user = guard.get_mut(&user_id).ok_or(AppError::NotFound)?;
        user.append_blog(blog_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Blog, NewBlog};
    use crate::infra::repositories::{BlogRepository, BlogStore};

    async fn seeded_repo() -> (Arc<MemoryStore>, UserStore) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), UserStore::new(store))
    }

    #[tokio::test]
    async fn insert_starts_with_empty_blogs() {
        let (_, repo) = seeded_repo().await;

        let user = repo
            .insert("root".to_string(), "Superuser".to_string(), "hash".to_string())
            .await
            .unwrap();

        assert!(user.blogs.is_empty());
        assert!(repo.find_by_username("root").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let (_, repo) = seeded_repo().await;
        repo.insert("root".to_string(), "Superuser".to_string(), "hash".to_string())
            .await
            .unwrap();

        let result = repo
            .insert("root".to_string(), "Other".to_string(), "hash".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn append_blog_grows_the_reference_list() {
        let (_, repo) = seeded_repo().await;
        let user = repo
            .insert("root".to_string(), "Superuser".to_string(), "hash".to_string())
            .await
            .unwrap();

        let blog_id = Uuid::new_v4();
        repo.append_blog(user.id, blog_id).await.unwrap();

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.blogs, vec![blog_id]);
    }

    #[tokio::test]
    async fn listing_expands_blogs_and_skips_stale_references() {
        let (store, repo) = seeded_repo().await;
        let user = repo
            .insert("root".to_string(), "Superuser".to_string(), "hash".to_string())
            .await
            .unwrap();

        let blog_repo = BlogStore::new(store);
        let blog: Blog = blog_repo
            .insert(NewBlog {
                title: "Canonical string reduction".to_string(),
                author: "Edsger W. Dijkstra".to_string(),
                url: "https://example.com/csr".to_string(),
                likes: 12,
                user: user.id,
            })
            .await
            .unwrap();
        repo.append_blog(user.id, blog.id).await.unwrap();
        // Stale reference left behind by an out-of-band deletion
        repo.append_blog(user.id, Uuid::new_v4()).await.unwrap();

        let users = repo.list_all_with_blogs().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].blogs.len(), 1);
        assert_eq!(users[0].blogs[0].title, "Canonical string reduction");
    }
}
