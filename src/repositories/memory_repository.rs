// src/repositories/memory_repository.rs
//
// In-memory repository
//
// All state sits behind one reader/writer lock. Every operation takes the
// lock exactly once, so multi-structure updates (movie index, review
// validation + append) are atomic with respect to other callers.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{normalize_user_name, Movie, MovieId, ReleaseYear, Review, Tag, User};
use crate::repositories::{MovieIndex, Repository, RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
struct MemoryStore {
    movies: MovieIndex,
    users: HashMap<String, Arc<User>>,
    reviews: Vec<Review>,
    tags: Vec<Tag>,
}

impl MemoryStore {
    /// Both ends of the review must already list it
    fn check_review_links(&self, review: &Review) -> RepositoryResult<()> {
        let attached_to_user = self
            .users
            .get(&review.user_name)
            .is_some_and(|user| user.has_review(review));
        if !attached_to_user {
            return Err(RepositoryError::MalformedAssociation(format!(
                "Review {} not correctly attached to a User",
                review.id
            )));
        }

        let attached_to_movie = self
            .movies
            .get(review.movie_id)
            .is_some_and(|movie| movie.has_review(review));
        if !attached_to_movie {
            return Err(RepositoryError::MalformedAssociation(format!(
                "Review {} not correctly attached to a Movie",
                review.id
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryRepository {
    store: RwLock<MemoryStore>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never leave a store half-updated, so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, MemoryStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Repository for MemoryRepository {
    fn add_user(&self, user: User) -> RepositoryResult<()> {
        let mut store = self.write();
        if store.users.contains_key(&user.user_name) {
            return Err(RepositoryError::DuplicateUser(user.user_name));
        }
        store.users.insert(user.user_name.clone(), Arc::new(user));
        Ok(())
    }

    fn get_user(&self, user_name: &str) -> Option<Arc<User>> {
        self.read()
            .users
            .get(&normalize_user_name(user_name))
            .cloned()
    }

    fn add_movie(&self, movie: Movie) -> RepositoryResult<()> {
        self.write().movies.insert(Arc::new(movie))
    }

    fn get_movie(&self, id: MovieId) -> Option<Arc<Movie>> {
        self.read().movies.get(id).cloned()
    }

    fn get_movies(&self) -> Vec<Arc<Movie>> {
        self.read().movies.iter().cloned().collect()
    }

    fn get_movies_by_year(&self, target_year: ReleaseYear) -> Vec<Arc<Movie>> {
        self.read().movies.with_year(target_year).to_vec()
    }

    fn get_number_of_movies(&self) -> usize {
        self.read().movies.len()
    }

    fn get_first_movie(&self) -> Option<Arc<Movie>> {
        self.read().movies.first().cloned()
    }

    fn get_last_movie(&self) -> Option<Arc<Movie>> {
        self.read().movies.last().cloned()
    }

    fn get_movies_by_id(&self, id_list: &[MovieId]) -> Vec<Arc<Movie>> {
        let store = self.read();
        id_list
            .iter()
            .filter_map(|id| store.movies.get(*id).cloned())
            .collect()
    }

    fn get_movie_ids_for_tag(&self, tag_name: &str) -> Vec<MovieId> {
        self.read()
            .tags
            .iter()
            .find(|tag| tag.tag_name == tag_name)
            .map(|tag| tag.tagged_movies.clone())
            .unwrap_or_default()
    }

    fn get_year_of_previous_movie(&self, movie: &Movie) -> Option<ReleaseYear> {
        self.read().movies.previous_year(movie.release_year)
    }

    fn get_year_of_next_movie(&self, movie: &Movie) -> Option<ReleaseYear> {
        self.read().movies.next_year(movie.release_year)
    }

    fn add_tag(&self, tag: Tag) {
        self.write().tags.push(tag);
    }

    fn get_tags(&self) -> Vec<Tag> {
        self.read().tags.clone()
    }

    fn add_review(&self, review: Review) -> RepositoryResult<()> {
        let mut store = self.write();
        store.check_review_links(&review)?;
        store.reviews.push(review);
        Ok(())
    }

    fn get_reviews(&self) -> Vec<Review> {
        self.read().reviews.clone()
    }
}
