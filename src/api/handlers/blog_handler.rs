//! Blog handlers.

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Blog, BlogWithOwner, CreateBlog, UpdateBlogLikes};
use crate::errors::AppResult;

/// Create blog routes
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/:id", get(get_blog).put(update_blog).delete(delete_blog))
}

/// List all blogs with their owners expanded
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    responses(
        (status = 200, description = "All blogs with owner expanded", body = [BlogWithOwner])
    )
)]
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<BlogWithOwner>>> {
    let blogs = state.blog_service.list_blogs().await?;
    Ok(Json(blogs))
}

/// Create a blog owned by the authenticated user
#[utoipa::path(
    post,
    path = "/blogs",
    tag = "Blogs",
    request_body = CreateBlog,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Blog created", body = Blog),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn create_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateBlog>,
) -> AppResult<(StatusCode, Json<Blog>)> {
    // The raw header goes to the service; token extraction is its concern
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let blog = state.blog_service.create_blog(auth_header, payload).await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// Get a single blog by id
#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "Blogs",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "The blog", body = Blog),
        (status = 404, description = "No blog at this id")
    )
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Blog>> {
    let blog = state.blog_service.get_blog(id).await?;
    Ok(Json(blog))
}

/// Update the likes count of a blog
#[utoipa::path(
    put,
    path = "/blogs/{id}",
    tag = "Blogs",
    params(("id" = Uuid, Path, description = "Blog id")),
    request_body = UpdateBlogLikes,
    responses(
        (status = 200, description = "Updated blog", body = Blog),
        (status = 404, description = "No blog at this id")
    )
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateBlogLikes>,
) -> AppResult<Json<Blog>> {
    let blog = state.blog_service.update_likes(id, payload.likes).await?;
    Ok(Json(blog))
}

/// Delete a blog (idempotent)
#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "Blogs",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 204, description = "Deleted, or id was already absent")
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.blog_service.delete_blog(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
