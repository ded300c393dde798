use std::sync::{PoisonError, RwLock};

use crate::domain::review::Review;

/// A registered reviewer
///
/// The password is only ever held as a hash (PHC string).
#[derive(Debug)]
pub struct User {
    /// Unique key, trimmed and lower-cased
    pub user_name: String,

    pub password_hash: String,

    /// Reviews attached through `make_review`
    reviews: RwLock<Vec<Review>>,
}

/// Canonical form of a user name, used both when storing and when looking up
pub fn normalize_user_name(user_name: &str) -> String {
    user_name.trim().to_lowercase()
}

impl User {
    pub fn new(user_name: &str, password_hash: String) -> Self {
        Self {
            user_name: normalize_user_name(user_name),
            password_hash,
            reviews: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the attached reviews, oldest first
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_review(&self, review: &Review) -> bool {
        self.reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(review)
    }

    pub(crate) fn attach_review(&self, review: Review) {
        self.reviews
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(review);
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_name == other.user_name
    }
}

impl Eq for User {}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User {}>", self.user_name)
    }
}
