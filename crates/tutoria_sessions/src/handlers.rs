// File: crates/tutoria_sessions/src/handlers.rs
use crate::logic::{apply_transition, BookingFlow, SessionAction};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};
use tutoria_common::models::{AuthUser, Session, SessionType, UserRole};
use tutoria_common::services::{BoxedError, NotificationSink};
use tutoria_common::{require_role, TutoriaError};
use tutoria_config::AppConfig;
use tutoria_db::SessionRepository;

// Define shared state needed by session handlers
#[derive(Clone)]
pub struct SessionsState<R> {
    pub config: Arc<AppConfig>,
    pub repo: R,
    /// Best-effort notification fan-out, wired when the feature is enabled.
    pub notifier: Option<Arc<dyn NotificationSink<Error = BoxedError>>>,
}

impl<R> SessionsState<R> {
    fn ensure_enabled(&self) -> Result<(), TutoriaError> {
        if self.config.use_sessions {
            Ok(())
        } else {
            Err(TutoriaError::ConfigError(
                "Sessions service is disabled.".to_string(),
            ))
        }
    }

    /// Push a notification, logging instead of failing the request.
    async fn notify(&self, user_id: &str, kind: &str, message: &str) {
        if let Some(notifier) = self.notifier.as_ref() {
            if let Err(e) = notifier.push(user_id, kind, message).await {
                warn!("Failed to notify {user_id}: {e}");
            }
        }
    }
}

// --- Requests ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Debug)]
pub struct CreateSessionRequest {
    pub tutor_id: String,
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-07"))]
    pub date: String,
    /// Slot start in HH:MM format
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: i64,
    pub session_type: SessionType,
    pub student_notes: Option<String>,
    /// The tutor's advertised hourly rate at booking time.
    #[cfg_attr(feature = "openapi", schema(example = 35.0))]
    pub hourly_rate: f64,
}

// --- Handlers ---

/// Handler to list the caller's sessions, as tutor or student per their role.
pub async fn list_sessions_handler<R>(
    State(state): State<Arc<SessionsState<R>>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Session>>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    state.ensure_enabled()?;
    let sessions = state.repo.list_for_user(&user.user_id, user.role).await?;
    Ok(Json(sessions))
}

/// Handler to fetch one session. Only its participants may see it.
pub async fn get_session_handler<R>(
    State(state): State<Arc<SessionsState<R>>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<Session>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    state.ensure_enabled()?;
    let session = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| TutoriaError::NotFoundError(format!("No session with id {id}")))?;
    ensure_participant(&user, &session)?;
    Ok(Json(session))
}

/// Handler to book a session. The request runs the whole wizard server-side,
/// so every step guard applies even when the client skipped the UI flow.
pub async fn create_session_handler<R>(
    State(state): State<Arc<SessionsState<R>>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<Session>), TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    state.ensure_enabled()?;
    require_role(&user, UserRole::Student)?;

    let mut flow = BookingFlow::new(&payload.tutor_id, payload.hourly_rate)?;
    flow.select_date(&payload.date)?;
    flow.select_time(&payload.start_time, payload.duration_minutes)?;
    flow.enter_details(payload.session_type, payload.student_notes)?;
    let draft = flow.confirm(&user.user_id)?;

    let session = state.repo.create(draft).await?;
    info!(
        "Student {} booked session {:?} with tutor {}",
        user.user_id, session.id, session.tutor_id
    );
    state
        .notify(
            &session.tutor_id,
            "session_created",
            &format!(
                "New session request for {} at {}",
                session.date, session.start_time
            ),
        )
        .await;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Handler for the tutor to confirm a pending session.
pub async fn confirm_session_handler<R>(
    state: State<Arc<SessionsState<R>>>,
    user: Extension<AuthUser>,
    id: Path<i64>,
) -> Result<Json<Session>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    transition_handler(state, user, id, SessionAction::Confirm).await
}

/// Handler for the tutor to start a confirmed session.
pub async fn start_session_handler<R>(
    state: State<Arc<SessionsState<R>>>,
    user: Extension<AuthUser>,
    id: Path<i64>,
) -> Result<Json<Session>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    transition_handler(state, user, id, SessionAction::Start).await
}

/// Handler for the tutor to end an in-progress session.
pub async fn end_session_handler<R>(
    state: State<Arc<SessionsState<R>>>,
    user: Extension<AuthUser>,
    id: Path<i64>,
) -> Result<Json<Session>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    transition_handler(state, user, id, SessionAction::End).await
}

/// Handler for either participant to cancel a session that has not started.
pub async fn cancel_session_handler<R>(
    state: State<Arc<SessionsState<R>>>,
    user: Extension<AuthUser>,
    id: Path<i64>,
) -> Result<Json<Session>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    transition_handler(state, user, id, SessionAction::Cancel).await
}

fn ensure_participant(user: &AuthUser, session: &Session) -> Result<(), TutoriaError> {
    if session.tutor_id == user.user_id || session.student_id == user.user_id {
        Ok(())
    } else {
        Err(TutoriaError::ForbiddenError(
            "Not a participant of this session".to_string(),
        ))
    }
}

/// The counterparty a lifecycle notification goes to.
fn counterparty<'a>(user: &AuthUser, session: &'a Session) -> &'a str {
    if session.tutor_id == user.user_id {
        &session.student_id
    } else {
        &session.tutor_id
    }
}

async fn transition_handler<R>(
    State(state): State<Arc<SessionsState<R>>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    action: SessionAction,
) -> Result<Json<Session>, TutoriaError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    state.ensure_enabled()?;

    let session = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| TutoriaError::NotFoundError(format!("No session with id {id}")))?;

    // Cancellation is open to both sides; the other transitions belong to
    // the tutor running the session.
    match action {
        SessionAction::Cancel => ensure_participant(&user, &session)?,
        _ => {
            if session.tutor_id != user.user_id {
                return Err(TutoriaError::ForbiddenError(
                    "Only the session's tutor may do this".to_string(),
                ));
            }
        }
    }

    let next = apply_transition(session.status, action)?;
    let updated = state
        .repo
        .update_status(id, next)
        .await?
        .ok_or_else(|| TutoriaError::NotFoundError(format!("No session with id {id}")))?;

    info!("Session {id} moved to {next} by {}", user.user_id);
    let kind = format!("session_{next}");
    state
        .notify(
            counterparty(&user, &updated),
            &kind,
            &format!(
                "Session on {} at {} is now {next}",
                updated.date, updated.start_time
            ),
        )
        .await;

    Ok(Json(updated))
}
