// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use handlers::register_activity_handlers;
pub use types::{DomainEvent, RepositoryPopulated, ReviewAdded, UserRegistered};
