use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        // CORS: allow any origin, method and header on every response,
        // including the default 404/405 fallbacks.
        .layer(CorsLayer::permissive())
}
