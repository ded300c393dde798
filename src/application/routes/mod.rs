// src/application/routes/mod.rs
//
// HTTP Route Handlers
//
// ARCHITECTURE:
// - Handlers are thin adapters between HTTP and Services
// - Handlers accept DTOs, return DTOs
// - Handlers convert errors through ErrorResponse
// - Handlers NEVER contain business logic

use axum::Router;

use crate::application::state::AppState;

pub mod auth_routes;
pub mod health_routes;
pub mod movie_routes;
pub mod tag_routes;

pub use health_routes::health_routes;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(movie_routes::movie_routes())
        .merge(tag_routes::tag_routes())
        .merge(auth_routes::auth_routes())
        .with_state(state)
}
