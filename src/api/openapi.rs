//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, blog_handler, user_handler};
use crate::domain::{Blog, BlogOwner, BlogSummary, BlogWithOwner, CreateBlog, UpdateBlogLikes, User, UserWithBlogs};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Bloglist API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bloglist API",
        version = "0.1.0",
        description = "Blogging REST API with JWT-authenticated blog creation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3003", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // Blog endpoints
        blog_handler::list_blogs,
        blog_handler::create_blog,
        blog_handler::get_blog,
        blog_handler::update_blog,
        blog_handler::delete_blog,
        // User endpoints
        user_handler::register,
        user_handler::list_users,
    ),
    components(
        schemas(
            // Domain types
            Blog,
            BlogOwner,
            BlogSummary,
            BlogWithOwner,
            CreateBlog,
            UpdateBlogLikes,
            User,
            UserWithBlogs,
            // Auth types
            auth_handler::LoginRequest,
            TokenResponse,
            // User handler types
            user_handler::RegisterRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuing"),
        (name = "Blogs", description = "Blog management operations"),
        (name = "Users", description = "User registration and listing")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /login"))
                        .build(),
                ),
            );
        }
    }
}
