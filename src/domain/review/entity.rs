use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movie::MovieId;

/// A user's review of a movie
///
/// A review refers to its user and movie by key. Both of them must list the
/// review before the repository will store it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Normalised name of the author
    pub user_name: String,

    pub movie_id: MovieId,

    pub review_text: String,

    pub timestamp: DateTime<Utc>,
}

impl Review {
    /// Create a detached review
    /// Use `make_review` to create one that is linked to its user and movie
    pub fn new(
        user_name: String,
        movie_id: MovieId,
        review_text: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name,
            movie_id,
            review_text,
            timestamp,
        }
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Review by {} on movie {}, {}>",
            self.user_name,
            self.movie_id,
            self.timestamp.to_rfc3339()
        )
    }
}
