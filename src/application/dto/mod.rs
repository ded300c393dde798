// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are client-facing representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Movie, Review, Tag, User};
use crate::services::MoviesByYear;

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: u32,
    pub title: String,
    pub release_year: u16,
    pub description: String,
    pub director: Option<String>,
    pub actors: Vec<String>,
    pub tags: Vec<String>,
    pub reviews: Vec<ReviewDto>,
}

/// Movies of one year plus the years to page to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesByYearDto {
    pub year: u16,
    pub movies: Vec<MovieDto>,
    pub previous_year: Option<u16>,
    pub next_year: Option<u16>,
}

// ============================================================================
// REVIEW DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: String,
    pub user_name: String,
    pub movie_id: u32,
    pub review_text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddReviewDto {
    pub user_name: String,
    pub review_text: String,
}

// ============================================================================
// TAG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub tag_name: String,
    pub tagged_movies: Vec<u32>,
}

// ============================================================================
// USER DTOs
// ============================================================================

/// Public view of a user. The password hash never leaves the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub user_name: String,
    pub number_of_reviews: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsDto {
    pub user_name: String,
    pub password: String,
}

// ============================================================================
// CONVERSIONS (Domain → DTO)
// ============================================================================

impl From<&Movie> for MovieDto {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.value(),
            title: movie.title.clone(),
            release_year: movie.release_year.value(),
            description: movie.description.clone(),
            director: movie.director.as_ref().map(|d| d.full_name().to_string()),
            actors: movie
                .actors
                .iter()
                .map(|a| a.full_name().to_string())
                .collect(),
            tags: movie.tags(),
            reviews: movie.reviews().into_iter().map(ReviewDto::from).collect(),
        }
    }
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_name: review.user_name,
            movie_id: review.movie_id.value(),
            review_text: review.review_text,
            timestamp: review.timestamp.to_rfc3339(),
        }
    }
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            tag_name: tag.tag_name,
            tagged_movies: tag.tagged_movies.into_iter().map(|id| id.value()).collect(),
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            number_of_reviews: user.reviews().len(),
        }
    }
}

impl MoviesByYearDto {
    pub fn new(year: u16, result: MoviesByYear) -> Self {
        Self {
            year,
            movies: result.movies.iter().map(|m| MovieDto::from(m.as_ref())).collect(),
            previous_year: result.previous_year.map(|y| y.value()),
            next_year: result.next_year.map(|y| y.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{make_review, Actor, Director, MovieId, ReleaseYear};
    use chrono::Utc;

    #[test]
    fn test_movie_dto_carries_associations() {
        let movie = Movie::new(MovieId::new(7), "Split", ReleaseYear::new(2016))
            .with_director(Director::new("M. Night Shyamalan"))
            .with_actors(Actor::parse_list("James McAvoy, Anya Taylor-Joy"));
        let user = User::new("thorke", "$argon2id$stub".to_string());
        make_review("Tense", &user, &movie, Utc::now()).unwrap();

        let dto = MovieDto::from(&movie);

        assert_eq!(dto.id, 7);
        assert_eq!(dto.director.as_deref(), Some("M. Night Shyamalan"));
        assert_eq!(dto.actors, vec!["James McAvoy", "Anya Taylor-Joy"]);
        assert_eq!(dto.reviews.len(), 1);
        assert_eq!(dto.reviews[0].user_name, "thorke");
    }

    #[test]
    fn test_user_dto_hides_password_hash() {
        let user = User::new("thorke", "$argon2id$secret".to_string());

        let json = serde_json::to_string(&UserDto::from(&user)).unwrap();

        assert!(!json.contains("argon2"));
    }
}
