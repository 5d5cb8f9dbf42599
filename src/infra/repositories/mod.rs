//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the document store,
//! following the Repository pattern for clean separation of concerns.
//! Reference expansion ("populate") is an explicit join performed here
//! after a batch fetch, never a store feature.

mod blog_repository;
mod user_repository;

pub use blog_repository::{BlogRepository, BlogStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use blog_repository::MockBlogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
