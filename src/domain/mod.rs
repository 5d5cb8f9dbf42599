//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod blog;
pub mod password;
pub mod user;

pub use blog::{Blog, BlogOwner, BlogSummary, BlogWithOwner, CreateBlog, NewBlog, UpdateBlogLikes};
pub use password::Password;
pub use user::{User, UserWithBlogs};
