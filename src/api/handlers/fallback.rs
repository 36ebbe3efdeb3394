//! Responses for requests that never reach a handler, and for handler panics.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::FrameworkError;

/// No route matches the request path.
pub async fn not_found_handler() -> FrameworkError {
    FrameworkError::from_status(StatusCode::NOT_FOUND)
}

/// The path exists but not for this method.
pub async fn method_not_allowed_handler() -> FrameworkError {
    FrameworkError::from_status(StatusCode::METHOD_NOT_ALLOWED)
}

/// Converts a caught panic into a generic 500 response.
///
/// The panic payload is logged but never sent to the client.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Unhandled exception in request handler");

    FrameworkError::internal().into_response()
}
