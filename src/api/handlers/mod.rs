//! HTTP request handlers.

pub mod auth_handler;
pub mod blog_handler;
pub mod user_handler;

pub use auth_handler::login;
pub use blog_handler::blog_routes;
pub use user_handler::user_routes;
