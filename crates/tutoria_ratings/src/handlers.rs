// File: crates/tutoria_ratings/src/handlers.rs
use crate::logic::{average_score, Rating};
use crate::storage::RatingRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use tutoria_common::models::{AuthUser, UserRole};
use tutoria_common::{require_role, TutoriaError};
use tutoria_config::AppConfig;

// Define shared state needed by rating handlers
#[derive(Clone)]
pub struct RatingsState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn RatingRepository>,
}

impl RatingsState {
    fn ensure_enabled(&self) -> Result<(), TutoriaError> {
        if self.config.use_ratings {
            Ok(())
        } else {
            Err(TutoriaError::ConfigError(
                "Ratings service is disabled.".to_string(),
            ))
        }
    }
}

// --- Requests / Responses ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Debug)]
pub struct CreateRatingPayload {
    pub session_id: i64,
    pub tutor_id: String,
    /// Stars, 1 to 5.
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub score: u8,
    pub comment: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct TutorRatingsResponse {
    pub tutor_id: String,
    /// Exact mean score, absent for an unrated tutor.
    pub average_score: Option<f64>,
    pub count: usize,
    pub ratings: Vec<Rating>,
}

// --- Handlers ---

/// Handler to list the caller's ratings: given for students, received for
/// tutors.
#[axum::debug_handler]
pub async fn list_ratings_handler(
    State(state): State<Arc<RatingsState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Rating>>, TutoriaError> {
    state.ensure_enabled()?;
    let ratings = match user.role {
        UserRole::Student => state.repo.list_for_student(&user.user_id).await?,
        UserRole::Tutor => state.repo.list_for_tutor(&user.user_id).await?,
    };
    Ok(Json(ratings))
}

/// Handler for a student to rate a session. One rating per session.
#[axum::debug_handler]
pub async fn create_rating_handler(
    State(state): State<Arc<RatingsState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateRatingPayload>,
) -> Result<(StatusCode, Json<Rating>), TutoriaError> {
    state.ensure_enabled()?;
    require_role(&user, UserRole::Student)?;

    if state
        .repo
        .find_for_session(payload.session_id, &user.user_id)
        .await?
        .is_some()
    {
        return Err(TutoriaError::ConflictError(format!(
            "Session {} is already rated",
            payload.session_id
        )));
    }

    let rating = Rating::new(
        payload.session_id,
        &payload.tutor_id,
        &user.user_id,
        payload.score,
        payload.comment,
    )?;
    let rating = state.repo.create(rating).await?;
    info!(
        "Student {} rated session {} with {} stars",
        user.user_id, rating.session_id, rating.score
    );
    Ok((StatusCode::CREATED, Json(rating)))
}

/// Handler for a tutor's public rating profile.
#[axum::debug_handler]
pub async fn tutor_ratings_handler(
    State(state): State<Arc<RatingsState>>,
    Path(tutor_id): Path<String>,
) -> Result<Json<TutorRatingsResponse>, TutoriaError> {
    state.ensure_enabled()?;
    let ratings = state.repo.list_for_tutor(&tutor_id).await?;
    Ok(Json(TutorRatingsResponse {
        tutor_id,
        average_score: average_score(&ratings),
        count: ratings.len(),
        ratings,
    }))
}

/// Handler to mark a review helpful.
#[axum::debug_handler]
pub async fn mark_helpful_handler(
    State(state): State<Arc<RatingsState>>,
    Path(id): Path<String>,
) -> Result<Json<Rating>, TutoriaError> {
    state.ensure_enabled()?;
    let rating = state
        .repo
        .increment_helpful(&id)
        .await?
        .ok_or_else(|| TutoriaError::NotFoundError(format!("No rating with id {id}")))?;
    Ok(Json(rating))
}
