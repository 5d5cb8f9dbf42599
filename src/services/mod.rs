//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits for
//! dependency inversion.

mod auth_service;
mod blog_service;
pub mod container;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{bearer_token, AuthService, Authenticator, Claims, TokenResponse};
pub use blog_service::{BlogManager, BlogService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
