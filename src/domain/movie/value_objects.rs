// src/domain/movie/value_objects.rs
//
// Movie value objects
//
// Small immutable wrappers that keep ids, years and people from being
// mixed up with plain integers and strings.

use serde::{Deserialize, Serialize};

// ============================================================================
// IDENTITY
// ============================================================================

/// Catalogue identifier of a movie (the `id` column of the movies table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u32);

impl MovieId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RELEASE YEAR (SORT KEY)
// ============================================================================

/// Year a movie was released. This is the key the repository sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseYear(u16);

impl ReleaseYear {
    /// No release year before this one is accepted by `validate_movie`
    pub const EARLIEST: u16 = 1900;

    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for ReleaseYear {
    fn from(year: u16) -> Self {
        Self(year)
    }
}

impl std::fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PEOPLE
// ============================================================================

/// Director credited on a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Director(String);

impl Director {
    pub fn new(full_name: &str) -> Self {
        Self(full_name.trim().to_string())
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actor credited on a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    pub fn new(full_name: &str) -> Self {
        Self(full_name.trim().to_string())
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// Splits a comma separated credit list, dropping blank entries
    pub fn parse_list(actors: &str) -> Vec<Actor> {
        actors
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Actor::new)
            .collect()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
