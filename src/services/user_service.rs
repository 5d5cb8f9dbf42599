//! User service - Registration and user listing.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MIN_USERNAME_LENGTH;
use crate::domain::{Password, User, UserWithBlogs};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, name: String, password: String) -> AppResult<User>;

    /// List all users with their blogs expanded
    async fn list_users(&self) -> AppResult<Vec<UserWithBlogs>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, username: String, name: String, password: String) -> AppResult<User> {
        if username.len() < MIN_USERNAME_LENGTH {
            return Err(AppError::validation(format!(
                "username must be at least {} characters",
                MIN_USERNAME_LENGTH
            )));
        }

        // Check for duplicates before hashing; the store constraint backstops
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("username"));
        }

        // The Password value object validates length and hashes
        let password_hash = Password::new(&password)?.into_string();
        self.users.insert(username, name, password_hash).await
    }

    async fn list_users(&self) -> AppResult<Vec<UserWithBlogs>> {
        self.users.list_all_with_blogs().await
    }
}
