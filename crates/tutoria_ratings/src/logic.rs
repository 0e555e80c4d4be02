// --- File: crates/tutoria_ratings/src/logic.rs ---
//! Tutor ratings: the entity, score rules, and the aggregate a tutor profile
//! shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutoria_common::TutoriaError;
use uuid::Uuid;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<RatingError> for TutoriaError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::ValidationError(msg) => TutoriaError::ValidationError(msg),
        }
    }
}

/// A student's rating of a completed session.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    pub session_id: i64,
    pub tutor_id: String,
    pub student_id: String,
    /// Stars, 1 to 5.
    pub score: u8,
    pub comment: Option<String>,
    /// How many readers found this review helpful.
    pub helpful_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        session_id: i64,
        tutor_id: &str,
        student_id: &str,
        score: u8,
        comment: Option<String>,
    ) -> Result<Self, RatingError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(RatingError::ValidationError(format!(
                "score must be between {MIN_SCORE} and {MAX_SCORE}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            tutor_id: tutor_id.to_string(),
            student_id: student_id.to_string(),
            score,
            comment: comment.filter(|c| !c.trim().is_empty()),
            helpful_count: 0,
            created_at: Utc::now(),
        })
    }
}

/// Exact mean score, None for an unrated tutor. Display rounding is the
/// client's concern.
pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: u64 = ratings.iter().map(|rating| u64::from(rating.score)).sum();
    Some(total as f64 / ratings.len() as f64)
}
