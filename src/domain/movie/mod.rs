pub mod entity;
pub mod invariants;

pub use entity::{MovieRef, DEFAULT_POSTER_SIZE};
pub use invariants::validate_movie;
