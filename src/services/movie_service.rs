// src/services/movie_service.rs
use std::sync::Arc;

use chrono::Utc;
use log::debug;

use crate::domain::{make_review, Movie, MovieId, ReleaseYear, Review, Tag};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ReviewAdded};
use crate::repositories::Repository;

#[derive(Debug, Clone)]
pub struct AddReviewRequest {
    pub movie_id: MovieId,
    pub review_text: String,
    pub user_name: String,
}

/// Movies released in one year, with the neighbouring years that hold movies
#[derive(Debug, Clone)]
pub struct MoviesByYear {
    pub movies: Vec<Arc<Movie>>,
    pub previous_year: Option<ReleaseYear>,
    pub next_year: Option<ReleaseYear>,
}

pub struct MovieService {
    repo: Arc<dyn Repository>,
    event_bus: Arc<EventBus>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn Repository>, event_bus: Arc<EventBus>) -> Self {
        Self { repo, event_bus }
    }

    pub fn get_movie(&self, movie_id: MovieId) -> AppResult<Arc<Movie>> {
        self.repo
            .get_movie(movie_id)
            .ok_or(AppError::NonExistentMovie(movie_id))
    }

    pub fn get_first_movie(&self) -> AppResult<Arc<Movie>> {
        self.repo.get_first_movie().ok_or(AppError::NotFound)
    }

    pub fn get_last_movie(&self) -> AppResult<Arc<Movie>> {
        self.repo.get_last_movie().ok_or(AppError::NotFound)
    }

    /// Adjacent years are taken from the first match and are both absent
    /// when the year has no movies.
    pub fn get_movies_by_year(&self, year: ReleaseYear) -> MoviesByYear {
        let movies = self.repo.get_movies_by_year(year);

        let (previous_year, next_year) = match movies.first() {
            Some(movie) => (
                self.repo.get_year_of_previous_movie(movie),
                self.repo.get_year_of_next_movie(movie),
            ),
            None => (None, None),
        };

        debug!("{} movies released in {}", movies.len(), year);
        MoviesByYear {
            movies,
            previous_year,
            next_year,
        }
    }

    pub fn get_movie_ids_for_tag(&self, tag_name: &str) -> Vec<MovieId> {
        self.repo.get_movie_ids_for_tag(tag_name)
    }

    pub fn get_movies_by_id(&self, id_list: &[MovieId]) -> Vec<Arc<Movie>> {
        self.repo.get_movies_by_id(id_list)
    }

    /// The first stored tag with that name
    pub fn get_tag(&self, tag_name: &str) -> AppResult<Tag> {
        self.repo
            .get_tags()
            .into_iter()
            .find(|tag| tag.tag_name == tag_name)
            .ok_or(AppError::NotFound)
    }

    pub fn get_movies_for_tag(&self, tag_name: &str) -> AppResult<Vec<Arc<Movie>>> {
        let tag = self.get_tag(tag_name)?;
        Ok(self.repo.get_movies_by_id(&tag.tagged_movies))
    }

    pub fn get_reviews_for_movie(&self, movie_id: MovieId) -> AppResult<Vec<Review>> {
        Ok(self.get_movie(movie_id)?.reviews())
    }

    /// The movie is checked before the user.
    pub fn add_review(&self, request: AddReviewRequest) -> AppResult<Review> {
        let movie = self.get_movie(request.movie_id)?;
        let user = self
            .repo
            .get_user(&request.user_name)
            .ok_or_else(|| AppError::UnknownUser(request.user_name.clone()))?;

        let review = make_review(&request.review_text, &user, &movie, Utc::now())?;
        self.repo.add_review(review.clone())?;

        self.event_bus.emit(ReviewAdded::new(
            review.id,
            review.user_name.clone(),
            review.movie_id,
        ));

        Ok(review)
    }
}
