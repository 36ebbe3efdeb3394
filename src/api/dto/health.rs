//! DTOs for the check endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving requests.
    pub status: &'static str,
    /// `ok` or `unavailable`.
    pub db: &'static str,
    pub env: String,
    pub version: &'static str,
}

/// Request metadata echoed by the debug endpoint.
#[derive(Debug, Serialize)]
pub struct DebugResponse {
    pub headers: BTreeMap<String, String>,
    pub remote_addr: Option<String>,
    pub method: String,
    pub args: BTreeMap<String, String>,
    pub env: String,
}
