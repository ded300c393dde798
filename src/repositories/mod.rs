// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories hold the canonical collection of each entity
// - Only write-path invariants are enforced here (unique keys, review links)
// - NO event emission
// - NO cross-service calls

pub mod memory_repository;
pub mod movie_index;
pub mod repository;

pub use memory_repository::MemoryRepository;
pub use movie_index::MovieIndex;
pub use repository::{Repository, RepositoryError, RepositoryResult};

#[cfg(test)]
pub use repository::MockRepository;
