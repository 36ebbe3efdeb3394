//! Request extractors with envelope-shaped rejections.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::error::FrameworkError;

/// Any JSON request body.
///
/// Structural checks are left to the service layer; this only rejects bodies
/// that are not JSON at all, reusing the status axum assigns (400, 415 or 422).
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = FrameworkError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(FrameworkError::new(rejection.status(), rejection.body_text())),
        }
    }
}

/// The `{id}` path segment of a post route, undecoded beyond percent-encoding.
///
/// Whether it is a well-formed id is decided by the repository.
#[derive(Debug)]
pub struct PostId(pub String);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = FrameworkError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(FrameworkError::new(rejection.status(), rejection.body_text())),
        }
    }
}

/// Query string as an ordered `name -> value` map. Repeated names keep the last value.
#[derive(Debug, Default)]
pub struct QueryArgs(pub BTreeMap<String, String>);

impl<S> FromRequestParts<S> for QueryArgs
where
    S: Send + Sync,
{
    type Rejection = FrameworkError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<BTreeMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Query(args)) => Ok(Self(args)),
            Err(rejection) => Err(FrameworkError::new(rejection.status(), rejection.body_text())),
        }
    }
}
