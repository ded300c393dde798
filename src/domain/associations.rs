// src/domain/associations.rs
//
// Bidirectional association constructors
//
// A review is referenced by its user and its movie; a tag and its movies
// reference each other. These functions are the only way those links are
// made, so both sides always agree.

use chrono::{DateTime, Utc};

use crate::domain::movie::Movie;
use crate::domain::review::{validate_review, Review};
use crate::domain::tag::{validate_tag, Tag};
use crate::domain::user::User;
use crate::domain::{DomainError, DomainResult};

/// Create a review and attach it to both its author and its movie
pub fn make_review(
    review_text: &str,
    user: &User,
    movie: &Movie,
    timestamp: DateTime<Utc>,
) -> DomainResult<Review> {
    let review = Review::new(
        user.user_name.clone(),
        movie.id,
        review_text.trim().to_string(),
        timestamp,
    );
    validate_review(&review)?;

    user.attach_review(review.clone());
    movie.attach_review(review.clone());

    Ok(review)
}

/// Apply a tag to a movie, recording the link on both sides
pub fn make_tag_association(movie: &Movie, tag: &mut Tag) -> DomainResult<()> {
    validate_tag(tag)?;
    if tag.is_applied_to(movie.id) {
        return Err(DomainError::DuplicateAssociation(format!(
            "Movie {} is already tagged with '{}'",
            movie.id, tag.tag_name
        )));
    }

    tag.tagged_movies.push(movie.id);
    movie.attach_tag(tag.tag_name.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::{MovieId, ReleaseYear};

    fn movie() -> Movie {
        Movie::new(MovieId::new(1), "Prometheus", ReleaseYear::new(2012))
    }

    #[test]
    fn test_make_review_links_both_sides() {
        let user = User::new("thorke", "$argon2id$stub".to_string());
        let movie = movie();

        let review = make_review("Gorgeous but confusing", &user, &movie, Utc::now()).unwrap();

        assert!(user.has_review(&review));
        assert!(movie.has_review(&review));
        assert_eq!(review.user_name, "thorke");
        assert_eq!(review.movie_id, MovieId::new(1));
    }

    #[test]
    fn test_make_review_rejects_blank_text() {
        let user = User::new("thorke", "$argon2id$stub".to_string());
        let movie = movie();

        assert!(make_review("   ", &user, &movie, Utc::now()).is_err());
        assert!(user.reviews().is_empty());
        assert_eq!(movie.number_of_reviews(), 0);
    }

    #[test]
    fn test_tag_association_is_bidirectional() {
        let movie = movie();
        let mut tag = Tag::new("Sci-Fi");

        make_tag_association(&movie, &mut tag).unwrap();

        assert!(tag.is_applied_to(movie.id));
        assert!(movie.is_tagged_by("Sci-Fi"));
    }

    #[test]
    fn test_tagging_twice_fails() {
        let movie = movie();
        let mut tag = Tag::new("Horror");

        make_tag_association(&movie, &mut tag).unwrap();
        let second = make_tag_association(&movie, &mut tag);

        assert!(matches!(second, Err(DomainError::DuplicateAssociation(_))));
        assert_eq!(tag.number_of_tagged_movies(), 1);
        assert_eq!(movie.tags(), vec!["Horror".to_string()]);
    }

    #[test]
    fn test_blank_tag_cannot_be_applied() {
        let movie = movie();
        let mut tag = Tag::new("   ");

        let result = make_tag_association(&movie, &mut tag);

        assert!(matches!(result, Err(DomainError::InvariantViolation(_))));
        assert_eq!(tag.number_of_tagged_movies(), 0);
        assert!(movie.tags().is_empty());
    }
}
