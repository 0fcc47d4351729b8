//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Age API
        .route("/api/calculate-age", post(handlers::age::calculate_age))
        // Health endpoint
        .route("/api/health", get(handlers::health::health_check))
        // OpenAPI docs (Swagger UI, ReDoc)
        .merge(openapi::create_openapi_routes())
        // Unknown routes answer in the API error shape
        .fallback(handlers::not_found)
        // Attach state
        .with_state(state)
}
