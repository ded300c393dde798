// src/services/utility_service.rs
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::domain::Movie;
use crate::repositories::Repository;

pub struct UtilityService {
    repo: Arc<dyn Repository>,
}

impl UtilityService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub fn get_tag_names(&self) -> Vec<String> {
        self.repo
            .get_tags()
            .into_iter()
            .map(|tag| tag.tag_name)
            .collect()
    }

    /// Up to `quantity` distinct movies in random order
    pub fn get_random_movies(&self, quantity: usize) -> Vec<Arc<Movie>> {
        let movies = self.repo.get_movies();
        movies
            .choose_multiple(&mut rand::thread_rng(), quantity)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MovieId, ReleaseYear, Tag};
    use crate::repositories::MockRepository;
    use std::collections::HashSet;

    fn movies(count: u32) -> Vec<Arc<Movie>> {
        (1..=count)
            .map(|id| {
                Arc::new(Movie::new(
                    MovieId::new(id),
                    &format!("Movie {}", id),
                    ReleaseYear::new(2000 + id as u16),
                ))
            })
            .collect()
    }

    #[test]
    fn test_tag_names_keep_insertion_order() {
        let mut repo = MockRepository::new();
        repo.expect_get_tags()
            .returning(|| vec![Tag::new("Sci-Fi"), Tag::new("Drama")]);

        let service = UtilityService::new(Arc::new(repo));

        assert_eq!(service.get_tag_names(), vec!["Sci-Fi", "Drama"]);
    }

    #[test]
    fn test_random_movies_are_distinct() {
        let mut repo = MockRepository::new();
        repo.expect_get_movies().returning(|| movies(10));

        let service = UtilityService::new(Arc::new(repo));
        let picked = service.get_random_movies(4);

        assert_eq!(picked.len(), 4);
        let ids: HashSet<MovieId> = picked.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_random_movies_clamped_to_repository_size() {
        let mut repo = MockRepository::new();
        repo.expect_get_movies().returning(|| movies(2));

        let service = UtilityService::new(Arc::new(repo));

        assert_eq!(service.get_random_movies(5).len(), 2);
        assert!(service.get_random_movies(0).is_empty());
    }
}
