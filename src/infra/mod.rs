//! Infrastructure layer - Persistence concerns.
//!
//! Contains the in-process document store and the repository
//! implementations built on top of it.

pub mod repositories;
pub mod store;

pub use repositories::{BlogRepository, BlogStore, UserRepository, UserStore};
pub use store::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockBlogRepository, MockUserRepository};
