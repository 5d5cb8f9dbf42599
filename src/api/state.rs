//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::MemoryStore;
use crate::services::{AuthService, BlogService, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Blog service
    pub blog_service: Arc<dyn BlogService>,
}

impl AppState {
    /// Create application state from a document store and config.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the service container for centralized wiring.
    pub fn from_config(store: Arc<MemoryStore>, config: Config) -> Self {
        use crate::services::ServiceContainer;

        let container = Services::from_store(store, config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            blog_service: container.blogs(),
        }
    }

    /// Create new application state with manually injected services.
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
}
