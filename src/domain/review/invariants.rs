use super::entity::Review;
use crate::domain::{DomainError, DomainResult};

/// Validates Review invariants
pub fn validate_review(review: &Review) -> DomainResult<()> {
    if review.review_text.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Review text cannot be empty".to_string(),
        ));
    }
    if review.user_name.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Review must name its author".to_string(),
        ));
    }
    Ok(())
}
