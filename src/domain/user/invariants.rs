use super::entity::User;
use crate::domain::{DomainError, DomainResult};

/// Validates all User invariants
pub fn validate_user(user: &User) -> DomainResult<()> {
    if user.user_name.is_empty() {
        return Err(DomainError::InvariantViolation(
            "User name cannot be empty".to_string(),
        ));
    }
    if user.password_hash.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "User '{}' has no password credential",
            user.user_name
        )));
    }
    Ok(())
}

/// Minimum length of a plaintext password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validates a plaintext password before it is hashed
///
/// At least eight characters with one upper-case letter, one lower-case
/// letter and one digit.
pub fn validate_password(password: &str) -> DomainResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::InvariantViolation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_upper && has_lower && has_digit) {
        return Err(DomainError::InvariantViolation(
            "Password must contain an upper-case letter, a lower-case letter and a digit"
                .to_string(),
        ));
    }
    Ok(())
}
