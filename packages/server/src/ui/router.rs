//! Axum router configuration.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handler, state::AppState};

/// Build the router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handler::health_check))
        .route(
            "/participants",
            post(handler::register_participant).get(handler::list_participants),
        )
        .route(
            "/messages",
            post(handler::post_message).get(handler::list_messages),
        )
        .route("/status", post(handler::heartbeat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
