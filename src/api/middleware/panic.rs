//! Panic recovery middleware.

use std::any::Any;

use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::handlers::panic_response;

/// Signature of the function turning a panic payload into a response.
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Catches panics in handlers and answers with a generic 500 body.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/posts", post(create_post_handler))
///     .layer(panic::layer());
/// ```
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}
