//! Tag invariants:
//!
//! 1. Tag name cannot be empty
//! 2. A movie appears at most once in a tag's movie list
//! 3. Tags never change a movie's descriptive data

pub mod entity;

pub use entity::Tag;

use crate::domain::{DomainError, DomainResult};

/// Validates Tag invariants
pub fn validate_tag(tag: &Tag) -> DomainResult<()> {
    if tag.tag_name.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Tag name cannot be empty".to_string(),
        ));
    }
    Ok(())
}
