// src/repositories/repository.rs
//
// Repository contract
//
// RULES:
// - Absence is an `Option` or an empty `Vec`, never an error
// - Errors are reserved for write-path invariants
// - No business logic beyond those invariants

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Movie, MovieId, ReleaseYear, Review, Tag, User};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Movie id {0} is already stored")]
    DuplicateMovieId(MovieId),

    #[error("User name '{0}' is already taken")]
    DuplicateUser(String),

    #[error("Malformed association: {0}")]
    MalformedAssociation(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Store of movies, users, reviews and tags
///
/// Movies are kept ordered by release year; the year queries rely on that
/// order and never scan the whole collection.
#[cfg_attr(test, mockall::automock)]
pub trait Repository: Send + Sync {
    /// Store a user under its (normalised) name. Names are unique.
    fn add_user(&self, user: User) -> RepositoryResult<()>;

    fn get_user(&self, user_name: &str) -> Option<Arc<User>>;

    /// Store a movie in year order. Ids are unique.
    fn add_movie(&self, movie: Movie) -> RepositoryResult<()>;

    fn get_movie(&self, id: MovieId) -> Option<Arc<Movie>>;

    /// Every stored movie, in release-year order
    fn get_movies(&self) -> Vec<Arc<Movie>>;

    fn get_movies_by_year(&self, target_year: ReleaseYear) -> Vec<Arc<Movie>>;

    fn get_number_of_movies(&self) -> usize;

    /// Earliest movie by release year
    fn get_first_movie(&self) -> Option<Arc<Movie>>;

    /// Latest movie by release year
    fn get_last_movie(&self) -> Option<Arc<Movie>>;

    /// Movies for the ids that are stored, in the order given
    fn get_movies_by_id(&self, id_list: &[MovieId]) -> Vec<Arc<Movie>>;

    fn get_movie_ids_for_tag(&self, tag_name: &str) -> Vec<MovieId>;

    /// Latest year strictly before the movie's release year
    fn get_year_of_previous_movie(&self, movie: &Movie) -> Option<ReleaseYear>;

    /// Earliest year strictly after the movie's release year
    fn get_year_of_next_movie(&self, movie: &Movie) -> Option<ReleaseYear>;

    fn add_tag(&self, tag: Tag);

    fn get_tags(&self) -> Vec<Tag>;

    /// Store a review that is already listed by its user and its movie.
    /// Anything else is rejected and nothing is stored.
    fn add_review(&self, review: Review) -> RepositoryResult<()>;

    fn get_reviews(&self) -> Vec<Review>;
}
