//! Bloglist API - A blogging REST API with JWT-authenticated content management.
//!
//! Manages user accounts and blog posts, associates posts with owning users,
//! and exposes HTTP endpoints for listing, creating, updating (likes), and
//! deleting posts, plus user registration, listing, and login.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (document store, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Blog, Password, User};
pub use errors::{AppError, AppResult};
pub use infra::MemoryStore;
