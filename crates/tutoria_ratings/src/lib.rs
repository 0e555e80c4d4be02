// --- File: crates/tutoria_ratings/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod storage;

pub use logic::{average_score, Rating, RatingError, MAX_SCORE, MIN_SCORE};
pub use storage::{InMemoryRatingRepository, RatingRepository};

#[cfg(test)]
mod handlers_test;
#[cfg(test)]
mod logic_test;
