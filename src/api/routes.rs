//! API route configuration.

use crate::api::handlers::{
    create_post_handler, debug_handler, delete_post_handler, get_post_handler, health_handler,
    update_post_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Post CRUD routes.
///
/// # Endpoints
///
/// - `POST   /posts`        - Create a post
/// - `GET    /posts/{id}`   - Fetch a post
/// - `PUT    /posts/{id}`   - Merge fields into a post
/// - `DELETE /posts/{id}`   - Delete a post
pub fn post_routes() -> Router<AppState> {
    Router::new().route("/posts", post(create_post_handler)).route(
        "/posts/{id}",
        get(get_post_handler)
            .put(update_post_handler)
            .delete(delete_post_handler),
    )
}

/// Diagnostic routes.
///
/// # Endpoints
///
/// - `GET /check/health` - Process and store health
/// - `GET /check/debug`  - Echo of request metadata
pub fn check_routes() -> Router<AppState> {
    Router::new()
        .route("/check/health", get(health_handler))
        .route("/check/debug", get(debug_handler))
}
