//! HTTP API server

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .nest(
            "/v1",
            Router::new().route("/classify", post(handlers::classify)),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
