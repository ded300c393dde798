// src/repositories/movie_index.rs
//
// Sorted positional index over movies
//
// INVARIANTS:
// - `by_year` is non-decreasing in release year at all times
// - Movies sharing a year keep their insertion order
// - `by_id` and `by_year` hold exactly the same movies
// - Year lookups binary search on the release year, then scan only the
//   matching run

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Movie, MovieId, ReleaseYear};
use crate::repositories::{RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
pub struct MovieIndex {
    by_year: Vec<Arc<Movie>>,
    by_id: HashMap<MovieId, Arc<Movie>>,
}

impl MovieIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert after every stored movie of the same year
    ///
    /// A duplicate id leaves the index untouched.
    pub fn insert(&mut self, movie: Arc<Movie>) -> RepositoryResult<()> {
        if self.by_id.contains_key(&movie.id) {
            return Err(RepositoryError::DuplicateMovieId(movie.id));
        }

        let position = self.upper_bound(movie.release_year);
        self.by_year.insert(position, Arc::clone(&movie));
        self.by_id.insert(movie.id, movie);
        Ok(())
    }

    pub fn get(&self, id: MovieId) -> Option<&Arc<Movie>> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    pub fn first(&self) -> Option<&Arc<Movie>> {
        self.by_year.first()
    }

    pub fn last(&self) -> Option<&Arc<Movie>> {
        self.by_year.last()
    }

    /// Movies in release-year order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Movie>> {
        self.by_year.iter()
    }

    /// The run of movies released in `year`, empty if there is none
    pub fn with_year(&self, year: ReleaseYear) -> &[Arc<Movie>] {
        match self.position_of_year(year) {
            Some(start) => {
                let run = self.by_year[start..]
                    .iter()
                    .take_while(|movie| movie.release_year == year)
                    .count();
                &self.by_year[start..start + run]
            }
            None => &[],
        }
    }

    /// Closest stored year strictly before `year`
    ///
    /// `None` when no stored movie has `year` or when it is the earliest one.
    pub fn previous_year(&self, year: ReleaseYear) -> Option<ReleaseYear> {
        let start = self.position_of_year(year)?;
        start
            .checked_sub(1)
            .map(|index| self.by_year[index].release_year)
    }

    /// Closest stored year strictly after `year`
    ///
    /// `None` when no stored movie has `year` or when it is the latest one.
    pub fn next_year(&self, year: ReleaseYear) -> Option<ReleaseYear> {
        self.position_of_year(year)?;
        self.by_year
            .get(self.upper_bound(year))
            .map(|movie| movie.release_year)
    }

    /// Leftmost position holding `year`
    fn position_of_year(&self, year: ReleaseYear) -> Option<usize> {
        let index = self.lower_bound(year);
        match self.by_year.get(index) {
            Some(movie) if movie.release_year == year => Some(index),
            _ => None,
        }
    }

    fn lower_bound(&self, year: ReleaseYear) -> usize {
        self.by_year
            .partition_point(|movie| movie.release_year < year)
    }

    fn upper_bound(&self, year: ReleaseYear) -> usize {
        self.by_year
            .partition_point(|movie| movie.release_year <= year)
    }
}
