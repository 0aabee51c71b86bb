use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Reference tables
        .route("/api/v1/room-types", get(handlers::list_room_types))
        .route("/api/v1/bulb-types", get(handlers::list_bulb_types))
        .route("/api/v1/surface-colors", get(handlers::list_surface_colors))
        .route("/api/v1/standard-wattages", get(handlers::list_standard_wattages))

        // Calculation
        .route("/api/v1/calculate", post(handlers::handle_calculate))
        .route("/api/v1/layout", post(handlers::handle_layout))

        // Share links
        .route(
            "/api/v1/share",
            get(handlers::open_share_link).post(handlers::create_share_link),
        )

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
