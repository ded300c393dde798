// src/events/handlers/activity_handler.rs
//
// Activity log: writes user-visible activity to the application log.
// Uses closure-based subscription (EventHandler is internal to bus).

use log::info;

use crate::events::types::{RepositoryPopulated, ReviewAdded, UserRegistered};
use crate::events::EventBus;

/// Registers the activity log handlers with the event bus
pub fn register_activity_handlers(bus: &EventBus) {
    bus.subscribe::<RepositoryPopulated, _>(|event| {
        info!(
            "[ACTIVITY] Catalogue ready: {} movies, {} tags, {} users, {} reviews",
            event.movies, event.tags, event.users, event.reviews
        );
    });

    bus.subscribe::<UserRegistered, _>(|event| {
        info!("[ACTIVITY] New user '{}'", event.user_name);
    });

    bus.subscribe::<ReviewAdded, _>(|event| {
        info!(
            "[ACTIVITY] '{}' reviewed movie {} (review {})",
            event.user_name, event.movie_id, event.review_id
        );
    });
}
