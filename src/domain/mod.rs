// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod associations;
pub mod movie;
pub mod review;
pub mod tag;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{validate_movie, Actor, Director, Movie, MovieId, ReleaseYear};

// User Domain
pub use user::{normalize_user_name, validate_password, validate_user, User};

// Review Domain
pub use review::{validate_review, Review};

// Tag Domain
pub use tag::{validate_tag, Tag};

// Associations
pub use associations::{make_review, make_tag_association};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate association: {0}")]
    DuplicateAssociation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
