use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

/// A named label applied to any number of movies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag_name: String,

    /// Movies this tag is applied to, in association order
    pub tagged_movies: Vec<MovieId>,
}

impl Tag {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.trim().to_string(),
            tagged_movies: Vec::new(),
        }
    }

    pub fn is_applied_to(&self, movie_id: MovieId) -> bool {
        self.tagged_movies.contains(&movie_id)
    }

    pub fn number_of_tagged_movies(&self) -> usize {
        self.tagged_movies.len()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag_name)
    }
}
