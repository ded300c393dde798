pub mod entity;
pub mod invariants;

pub use entity::{normalize_user_name, User};
pub use invariants::{validate_password, validate_user, MIN_PASSWORD_LENGTH};
