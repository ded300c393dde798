// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod csv_loader;
pub mod password;

pub use csv_loader::{
    load_movies_and_tags, load_reviews, load_users, populate, LoadError, PopulationSummary,
    MOVIES_FILE, REVIEWS_FILE, USERS_FILE,
};
pub use password::{hash_password, verify_password};
