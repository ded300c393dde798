// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::MovieId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// POPULATION EVENTS
// ============================================================================

/// Emitted once the startup load has filled the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryPopulated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movies: usize,
    pub tags: usize,
    pub users: usize,
    pub reviews: usize,
}

impl RepositoryPopulated {
    pub fn new(movies: usize, tags: usize, users: usize, reviews: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movies,
            tags,
            users,
            reviews,
        }
    }
}

impl DomainEvent for RepositoryPopulated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "RepositoryPopulated" }
}

// ============================================================================
// USER EVENTS
// ============================================================================

/// Emitted when a new user registers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_name: String,
}

impl UserRegistered {
    pub fn new(user_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_name,
        }
    }
}

impl DomainEvent for UserRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserRegistered" }
}

// ============================================================================
// REVIEW EVENTS
// ============================================================================

/// Emitted when a review has been linked and stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub review_id: Uuid,
    pub user_name: String,
    pub movie_id: MovieId,
}

impl ReviewAdded {
    pub fn new(review_id: Uuid, user_name: String, movie_id: MovieId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            review_id,
            user_name,
            movie_id,
        }
    }
}

impl DomainEvent for ReviewAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReviewAdded" }
}
