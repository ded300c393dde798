// src/lib.rs
// MovieFlix - Movie review web application
//
// Architecture:
// - Domain-centric: movies, users, reviews and tags with their invariants
// - Repository: in-memory store, movies kept in release-year order
// - Event-driven: services report what happened through the event bus
// - Explicit: the repository is built at startup and injected, never global
// - Application Layer: HTTP boundary (axum)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;
pub mod config;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    make_review,
    make_tag_association,
    validate_movie,
    validate_review,
    validate_tag,
    validate_user,
    Actor,
    Director,
    DomainError,
    // Movie
    Movie,
    MovieId,
    ReleaseYear,
    // Review
    Review,
    // Tag
    Tag,
    // User
    User,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_activity_handlers,
    DomainEvent,
    EventBus,
    EventLogEntry,
    RepositoryPopulated,
    ReviewAdded,
    UserRegistered,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{MemoryRepository, MovieIndex, Repository, RepositoryError};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{populate, LoadError, PopulationSummary};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AddReviewRequest,
    AuthService,
    MovieService,
    MoviesByYear,
    RegisterUserRequest,
    UtilityService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use app::initialize_catalogue;
pub use application::{build_router, AppState};
pub use config::Config;

// Re-export application submodules
pub use application::dto;
