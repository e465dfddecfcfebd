//! API Routes
//!
//! Configures the Axum router for the completion proxy.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{completion_proxy_handler, health_handler, AppState};
use crate::client::PROXY_PATH;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/deepseek` - Relay (or mock) a completion request
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: the mini-app is served from another origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(PROXY_PATH, post(completion_proxy_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
