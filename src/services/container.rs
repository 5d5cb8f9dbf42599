//! Service Container - Centralized service wiring.
//!
//! Wires repositories over the document store into the service
//! implementations, and hands out trait objects for injection.

use std::sync::Arc;

use super::{AuthService, BlogService, UserService};
use crate::config::Config;
use crate::infra::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get blog service
    fn blogs(&self) -> Arc<dyn BlogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    blog_service: Arc<dyn BlogService>,
}

impl Services {
    /// Create a new service container with pre-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        blog_service: Arc<dyn BlogService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            blog_service,
        }
    }

    /// Create a service container over a document store
    pub fn from_store(store: Arc<MemoryStore>, config: Config) -> Self {
        use super::{Authenticator, BlogManager, UserManager};
        use crate::infra::{BlogStore, UserStore};

        let user_repo = Arc::new(UserStore::new(store.clone()));
        let blog_repo = Arc::new(BlogStore::new(store));

        let auth_service = Arc::new(Authenticator::new(user_repo.clone(), config));
        let user_service = Arc::new(UserManager::new(user_repo.clone()));
        let blog_service = Arc::new(BlogManager::new(
            blog_repo,
            user_repo,
            auth_service.clone(),
        ));

        Self {
            auth_service,
            user_service,
            blog_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn blogs(&self) -> Arc<dyn BlogService> {
        self.blog_service.clone()
    }
}
