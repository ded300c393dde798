// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod auth_service;
pub mod movie_service;
pub mod utility_service;


// Re-export all services and their types
pub use movie_service::{
    AddReviewRequest,
    MovieService,
    MoviesByYear,
};

pub use auth_service::{
    AuthService,
    RegisterUserRequest,
};

pub use utility_service::UtilityService;
