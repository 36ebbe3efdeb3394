//! Error taxonomy and HTTP rendering.
//!
//! Every failure that crosses a layer boundary is an [`AppError`]: a tagged
//! [`ErrorKind`], a human-readable message, a status code (defaulting to the
//! kind's entry in [`ErrorKind::default_status`]) and optional structured
//! details. Handlers return `Result<_, AppError>` and the [`IntoResponse`]
//! impl is the single place where errors become HTTP responses.
//!
//! Failures raised by the HTTP framework itself (unknown routes, malformed
//! bodies, panics) are rendered through [`FrameworkError`], which uses the
//! `{success, message, code}` shape.

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

use crate::api::envelope::error_response;

/// Kinds of failure known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Generic business-rule violation.
    Business,
    /// Input failed field validation.
    Validation,
    /// Duplicate or conflicting resource.
    Conflict,
    /// Underlying store failure.
    Database,
    /// No record matches the given id.
    NotFound,
    /// Unique-constraint violation on insert.
    DuplicateKey,
    /// Generic transport-level error.
    Http,
    Unauthorized,
    Forbidden,
    BadRequest,
    TooManyRequests,
}

impl ErrorKind {
    /// The root kind this one specialises: `Business`, `Database` or `Http`.
    pub fn family(self) -> ErrorKind {
        match self {
            Self::Business | Self::Validation | Self::Conflict => Self::Business,
            Self::Database | Self::NotFound | Self::DuplicateKey => Self::Database,
            Self::Http
            | Self::Unauthorized
            | Self::Forbidden
            | Self::BadRequest
            | Self::TooManyRequests => Self::Http,
        }
    }

    /// Returns true if `self` is `other` or belongs to the `other` family.
    pub fn is_a(self, other: ErrorKind) -> bool {
        self == other || self.family() == other
    }

    /// Status code used when an error of this kind carries no override.
    pub fn default_status(self) -> StatusCode {
        match self {
            Self::Business => StatusCode::BAD_REQUEST,
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DuplicateKey => StatusCode::CONFLICT,
            Self::Http => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Message used by the kind-named constructors when none is given.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Business => "Business logic error",
            Self::Validation => "Validation failed",
            Self::Conflict => "Resource conflict",
            Self::Database => "Database error",
            Self::NotFound => "Data not found",
            Self::DuplicateKey => "Duplicate key error",
            Self::Http => "HTTP error",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::BadRequest => "Bad request",
            Self::TooManyRequests => "Too many requests",
        }
    }
}

/// A typed application failure.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    status: StatusCode,
    details: Option<Value>,
}

impl AppError {
    /// Creates an error of `kind` with the kind's default status.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: kind.default_status(),
            details: None,
        }
    }

    /// Creates an error of `kind` with the kind's default message and status.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    /// Overrides the status code for this instance.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attaches structured details rendered as the envelope's `errors` field.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn business(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Business, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateKey, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Http, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyRequests, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = ?self.kind, status = %self.status, "{}", self.message);
        } else {
            tracing::warn!(kind = ?self.kind, status = %self.status, "{}", self.message);
        }

        error_response(self.message, self.status, self.details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<ValidationErrors> for AppError {
    /// Renders field errors as a JSON text message and keeps the same map as details.
    fn from(errors: ValidationErrors) -> Self {
        let fields = field_messages(&errors);
        let message = serde_json::to_string(&fields)
            .unwrap_or_else(|_| ErrorKind::Validation.default_message().to_string());

        AppError::validation(message).with_details(serde_json::json!(fields))
    }
}

/// Flattens validation errors into `field -> first message`, ordered by field.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.clone())
                .unwrap_or(Cow::Borrowed("Invalid value"));
            (field.to_string(), message.to_string())
        })
        .collect()
}

/// Maps driver errors onto the database family.
///
/// The driver error itself is logged here and never rendered to clients.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        tracing::warn!(constraint = ?db.constraint(), "Unique constraint violation");
        return AppError::from_kind(ErrorKind::DuplicateKey);
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            tracing::error!(error = %e, "Document store connection failed");
            AppError::database("Database connection failed: Unable to connect to server")
        }
        other => {
            tracing::error!(error = %other, "Document store error");
            AppError::from_kind(ErrorKind::Database)
        }
    }
}

/// Body used for failures raised outside handler code.
#[derive(Debug, Serialize)]
struct FrameworkErrorBody {
    success: bool,
    message: String,
    code: u16,
}

/// A failure produced by routing, body extraction or panic recovery.
#[derive(Debug)]
pub struct FrameworkError {
    status: StatusCode,
    message: String,
}

impl FrameworkError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Uses the canonical reason phrase as the message.
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Error"))
    }

    /// The response sent when a handler panicked.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for FrameworkError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, "HTTP error: {}", self.message);

        let body = FrameworkErrorBody {
            success: false,
            message: self.message,
            code: self.status.as_u16(),
        };

        (self.status, Json(body)).into_response()
    }
}
