//! Service status endpoint.

use axum::Json;
use serde::Serialize;

/// Service name reported by the status endpoint.
pub const SERVICE_NAME: &str = "pl-live";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET / - Liveness check.
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}
