use std::sync::{PoisonError, RwLock};

use super::value_objects::{Actor, Director, MovieId, ReleaseYear};
use crate::domain::review::Review;

/// A movie in the catalogue
///
/// Descriptive fields are fixed at construction. The review and tag lists are
/// the only parts that change after the movie is stored, and only through the
/// association functions in `crate::domain::associations`.
#[derive(Debug)]
pub struct Movie {
    /// Catalogue identifier (unique across the repository)
    pub id: MovieId,

    /// Sort key of the repository index
    pub release_year: ReleaseYear,

    pub title: String,

    pub description: String,

    pub director: Option<Director>,

    pub actors: Vec<Actor>,

    /// Reviews attached through `make_review`
    reviews: RwLock<Vec<Review>>,

    /// Names of tags attached through `make_tag_association`
    tags: RwLock<Vec<String>>,
}

impl Movie {
    /// Create a new Movie with no description, director or cast
    pub fn new(id: MovieId, title: &str, release_year: ReleaseYear) -> Self {
        Self {
            id,
            release_year,
            title: title.trim().to_string(),
            description: String::new(),
            director: None,
            actors: Vec::new(),
            reviews: RwLock::new(Vec::new()),
            tags: RwLock::new(Vec::new()),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    pub fn with_director(mut self, director: Director) -> Self {
        self.director = Some(director);
        self
    }

    pub fn with_actors(mut self, actors: Vec<Actor>) -> Self {
        self.actors = actors;
        self
    }

    /// Snapshot of the attached reviews, oldest first
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn number_of_reviews(&self) -> usize {
        self.reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_review(&self, review: &Review) -> bool {
        self.reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(review)
    }

    /// Snapshot of the attached tag names
    pub fn tags(&self) -> Vec<String> {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_tagged_by(&self, tag_name: &str) -> bool {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|name| name == tag_name)
    }

    pub(crate) fn attach_review(&self, review: Review) {
        self.reviews
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(review);
    }

    pub(crate) fn attach_tag(&self, tag_name: String) {
        self.tags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tag_name);
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Movie {}, {}>", self.title, self.release_year)
    }
}
