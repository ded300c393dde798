// src/app/catalogue_init.rs
//
// Catalogue Initialization
//
// Application-level wiring: one repository, one event bus, the activity
// handlers, the startup load and the services on top.
//
// CRITICAL RULES:
// - The repository is created here and nowhere else
// - Handlers are registered before anything is emitted
// - A failed load aborts startup

use std::path::Path;
use std::sync::Arc;

use crate::application::AppState;
use crate::error::AppResult;
use crate::events::{register_activity_handlers, EventBus, RepositoryPopulated};
use crate::infrastructure::populate;
use crate::repositories::MemoryRepository;

// ============================================================================
// CATALOGUE INITIALIZATION
// ============================================================================

/// Builds the application state from the CSV tables in `data_dir`.
///
/// This function:
/// 1. Creates the event bus and registers the activity handlers
/// 2. Creates the in-memory repository and populates it
/// 3. Emits `RepositoryPopulated`
/// 4. Creates the services
pub fn initialize_catalogue(data_dir: &Path) -> AppResult<AppState> {
    let event_bus = Arc::new(EventBus::new());
    register_activity_handlers(&event_bus);

    let repo = Arc::new(MemoryRepository::new());
    let summary = populate(data_dir, repo.as_ref())?;

    event_bus.emit(RepositoryPopulated::new(
        summary.movies,
        summary.tags,
        summary.users,
        summary.reviews,
    ));

    Ok(AppState::new(repo, event_bus))
}
