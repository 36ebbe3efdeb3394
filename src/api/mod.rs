//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses into the uniform envelope.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads that are not domain entities
//! - [`envelope`] - `{success, message, data | errors}` response bodies
//! - [`extract`] - Request body extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and panic recovery
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod envelope;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
