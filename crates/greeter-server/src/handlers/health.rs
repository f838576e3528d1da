use axum::{http::StatusCode, Json};

use greeter_core::HealthResponse;

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::running()))
}
