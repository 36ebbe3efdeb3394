//! Handlers for post CRUD endpoints.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::api::dto::post::CreatedPost;
use crate::api::envelope::{self, success_response};
use crate::api::extract::{JsonBody, PostId};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a post.
///
/// # Endpoint
///
/// `POST /posts/`
///
/// # Request Body
///
/// ```json
/// { "title": "Hello", "content": "World", "tags": ["any", "extra", "fields"] }
/// ```
///
/// # Response
///
/// `201 Created` with `{"success": true, "message": "Created", "data": {"id": "..."}}`
///
/// # Errors
///
/// Returns 422 if `title` or `content` is missing or empty, with the failing
/// fields in `errors`. Returns 500 on store failures.
pub async fn create_post_handler(
    State(state): State<AppState>,
    JsonBody(data): JsonBody,
) -> Result<Response, AppError> {
    let id = state.post_service.create_post(data).await?;

    Ok(success_response(
        Some(CreatedPost { id }),
        "Created",
        StatusCode::CREATED,
    ))
}

/// Returns a single post.
///
/// # Endpoint
///
/// `GET /posts/{id}`
///
/// # Errors
///
/// Returns 404 if no post has this id and 400 if the id is malformed.
pub async fn get_post_handler(
    PostId(id): PostId,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let post = state.post_service.get_post(&id).await?;

    Ok(envelope::ok(post))
}

/// Merges the request body into an existing post.
///
/// # Endpoint
///
/// `PUT /posts/{id}`
///
/// The body must still carry non-empty `title` and `content`; other keys are
/// merged into the stored document and untouched keys are kept.
///
/// # Errors
///
/// Returns 422 on invalid input, 404 if no post has this id and 400 if the id
/// is malformed.
pub async fn update_post_handler(
    PostId(id): PostId,
    State(state): State<AppState>,
    JsonBody(data): JsonBody,
) -> Result<Response, AppError> {
    state.post_service.update_post(&id, data).await?;

    Ok(envelope::message("Updated"))
}

/// Deletes a post.
///
/// # Endpoint
///
/// `DELETE /posts/{id}`
///
/// # Errors
///
/// Returns 404 if no post has this id and 400 if the id is malformed.
pub async fn delete_post_handler(
    PostId(id): PostId,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    state.post_service.delete_post(&id).await?;

    Ok(envelope::message("Deleted"))
}
