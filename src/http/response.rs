//! Locally synthesized responses.
//!
//! # Responsibilities
//! - Fixed liveness response for the well-known health path
//! - Terminal responses for unmatched paths and unreachable backends
//!
//! # Design Decisions
//! - The health body is a serialized struct, not a handwritten string,
//!   so the shape stays valid JSON under change
//! - Backend failures map to 502; this proxy never retries

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of the liveness response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// The fixed liveness response: `200`, `{"status":"healthy"}`.
pub fn health_response() -> Response {
    (StatusCode::OK, Json(HealthStatus { status: "healthy" })).into_response()
}

/// Response for paths outside the service prefix.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "no matching service prefix").into_response()
}

/// Response when the backend cannot be reached.
pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "backend request failed").into_response()
}
