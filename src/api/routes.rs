//! API Routes
//!
//! Configures the Axum router with all clipboard server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, get_handler, health_handler, index_handler, raw_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - API description
/// - `POST /` - Store the raw body, returns a clipboard id
/// - `GET /health` - Store health check
/// - `GET /:id` - Retrieve content as JSON
/// - `GET /:id/raw` - Retrieve content as raw bytes
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler).post(create_handler))
        .route("/health", get(health_handler))
        .route("/:id", get(get_handler))
        .route("/:id/raw", get(raw_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
