// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::repositories::Repository;
use crate::services::{AuthService, MovieService, UtilityService};

/// Application state shared across HTTP handlers.
/// All fields are Arc-wrapped; cloning is cheap and shares the services.
#[derive(Clone)]
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub movie_service: Arc<MovieService>,
    pub auth_service: Arc<AuthService>,
    pub utility_service: Arc<UtilityService>,
}

impl AppState {
    /// Build every service over one repository and one event bus
    pub fn new(repo: Arc<dyn Repository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            movie_service: Arc::new(MovieService::new(Arc::clone(&repo), Arc::clone(&event_bus))),
            auth_service: Arc::new(AuthService::new(Arc::clone(&repo), Arc::clone(&event_bus))),
            utility_service: Arc::new(UtilityService::new(repo)),
            event_bus,
        }
    }
}
