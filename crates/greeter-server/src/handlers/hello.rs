use axum::{http::StatusCode, Json};

use greeter_core::HelloResponse;

/// Greeting endpoint.
pub async fn hello() -> (StatusCode, Json<HelloResponse>) {
    (StatusCode::OK, Json(HelloResponse::greeting()))
}
