pub mod entity;
pub mod invariants;
pub mod value_objects;

pub use entity::Movie;
pub use invariants::validate_movie;
pub use value_objects::{Actor, Director, MovieId, ReleaseYear};
