//! API Routes
//!
//! Configures the Axum router with all preloader endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    chapters_handler, clear_handler, content_handler, health_handler, preload_handler,
    stats_handler, AppState,
};
use crate::preloader::Fetch;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router<F: Fetch>(state: AppState<F>) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler::<F>))
        .route(
            "/content",
            get(content_handler::<F>).delete(clear_handler::<F>),
        )
        .route("/preload", post(preload_handler::<F>))
        .route("/preload/chapters", post(chapters_handler::<F>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
