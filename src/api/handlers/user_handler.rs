//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{User, UserWithBlogs};
use crate::errors::AppResult;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique username (minimum 3 characters)
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    #[schema(example = "dijkstra", min_length = 3)]
    pub username: String,
    /// Display name
    #[schema(example = "Edsger Dijkstra")]
    pub name: String,
    /// Password (minimum 3 characters)
    #[validate(length(min = 3, message = "password must be at least 3 characters"))]
    #[schema(example = "salainen", min_length = 3)]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(register))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Password missing or too short"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .user_service
        .register(payload.username, payload.name, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users with their blogs expanded
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users with blogs expanded", body = [UserWithBlogs])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserWithBlogs>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}
