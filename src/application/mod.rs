// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - It provides the boundary between HTTP clients and Domain (Services)
// - It translates between DTOs and domain entities
// - Handlers receive AppState; there is no global repository

pub mod dto;
pub mod error_handling;
pub mod routes;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use routes::build_router;
pub use state::AppState;
