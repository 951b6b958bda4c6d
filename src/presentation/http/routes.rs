//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::get,
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/cursos", curso_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Course CRUD routes
fn curso_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::curso::get_all_cursos).post(handlers::curso::create_curso),
        )
        .route(
            "/{id}",
            get(handlers::curso::get_curso_by_id)
                .put(handlers::curso::update_curso)
                .delete(handlers::curso::delete_curso),
        )
}
