use super::entity::Movie;
use super::value_objects::ReleaseYear;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_release_year(movie.release_year)?;
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_release_year(year: ReleaseYear) -> DomainResult<()> {
    if year.value() < ReleaseYear::EARLIEST {
        return Err(DomainError::InvariantViolation(format!(
            "Release year {} is earlier than {}",
            year,
            ReleaseYear::EARLIEST
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Identity (MovieId) is unique and immutable
/// 2. Title cannot be empty
/// 3. Release year is not earlier than 1900
/// 4. Equality is identity equality
/// 5. Reviews and tags change only through association functions

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::MovieId;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::new(MovieId::new(1), "Guardians of the Galaxy", ReleaseYear::new(2014));
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let movie = Movie::new(MovieId::new(1), "  ", ReleaseYear::new(2014));
        assert!(validate_movie(&movie).is_err());
    }

    #[test]
    fn test_ancient_release_year_fails() {
        let movie = Movie::new(MovieId::new(1), "Roundhay Garden Scene", ReleaseYear::new(1888));
        assert!(validate_movie(&movie).is_err());
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Movie::new(MovieId::new(7), "Split", ReleaseYear::new(2016));
        let b = Movie::new(MovieId::new(7), "Split (Director's Cut)", ReleaseYear::new(2017));
        let c = Movie::new(MovieId::new(8), "Split", ReleaseYear::new(2016));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
