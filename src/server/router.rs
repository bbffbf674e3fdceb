//! Router Configuration

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::server::{handlers, state::AppState};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::home))
        .route("/api/users/profile", get(handlers::profile))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
