//! Handlers for the `/check` diagnostics endpoints.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{Extensions, HeaderMap, Method},
};

use crate::api::dto::health::{DebugResponse, HealthResponse};
use crate::api::extract::QueryArgs;
use crate::state::AppState;

/// Reports process and store health.
///
/// # Endpoint
///
/// `GET /check/health`
///
/// Always answers `200 OK`; an unreachable store is reported as
/// `"db": "unavailable"` rather than as an error status.
///
/// # Response
///
/// ```json
/// { "status": "ok", "db": "ok", "env": "production", "version": "1.0.0" }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "/check/health store check failed");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        db,
        env: state.environment.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Echoes request metadata.
///
/// # Endpoint
///
/// `GET /check/debug`
///
/// Repeated headers are joined with `, `. `remote_addr` is `null` when the
/// server was not started with connection info.
pub async fn debug_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    extensions: Extensions,
    QueryArgs(args): QueryArgs,
) -> Json<DebugResponse> {
    let remote_addr = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    Json(DebugResponse {
        headers: flatten_headers(&headers),
        remote_addr,
        method: method.to_string(),
        args,
        env: state.environment.to_string(),
    })
}

fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        flat.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    flat
}
