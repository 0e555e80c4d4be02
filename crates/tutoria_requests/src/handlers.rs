// File: crates/tutoria_requests/src/handlers.rs
use crate::logic::SessionRequest;
use crate::storage::RequestRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};
use tutoria_common::models::{AuthUser, UserRole};
use tutoria_common::services::{BoxedError, NotificationSink};
use tutoria_common::{require_role, TutoriaError};
use tutoria_config::AppConfig;

// Define shared state needed by request handlers
#[derive(Clone)]
pub struct RequestsState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn RequestRepository>,
    pub notifier: Option<Arc<dyn NotificationSink<Error = BoxedError>>>,
}

impl RequestsState {
    fn ensure_enabled(&self) -> Result<(), TutoriaError> {
        if self.config.use_requests {
            Ok(())
        } else {
            Err(TutoriaError::ConfigError(
                "Session requests service is disabled.".to_string(),
            ))
        }
    }

    async fn notify(&self, user_id: &str, kind: &str, message: &str) {
        if let Some(notifier) = self.notifier.as_ref() {
            if let Err(e) = notifier.push(user_id, kind, message).await {
                warn!("Failed to notify {user_id}: {e}");
            }
        }
    }

    /// Load a request and check the caller is the tutor it addresses.
    async fn owned_request(
        &self,
        user: &AuthUser,
        id: &str,
    ) -> Result<SessionRequest, TutoriaError> {
        require_role(user, UserRole::Tutor)?;
        let request = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| TutoriaError::NotFoundError(format!("No request with id {id}")))?;
        if request.tutor_id != user.user_id {
            return Err(TutoriaError::ForbiddenError(
                "This request is addressed to another tutor".to_string(),
            ));
        }
        Ok(request)
    }
}

// --- Requests ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Debug)]
pub struct CreateRequestPayload {
    pub tutor_id: String,
    pub message: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Debug)]
pub struct RejectPayload {
    pub reason: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Debug)]
pub struct ReschedulePayload {
    /// RFC 3339 timestamp
    #[cfg_attr(feature = "openapi", schema(example = "2026-09-07T10:00:00Z"))]
    pub proposed_start: String,
    #[cfg_attr(feature = "openapi", schema(example = "2026-09-07T11:00:00Z"))]
    pub proposed_end: String,
}

// --- Handlers ---

/// Handler for a student to open a request with a tutor.
#[axum::debug_handler]
pub async fn create_request_handler(
    State(state): State<Arc<RequestsState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateRequestPayload>,
) -> Result<(StatusCode, Json<SessionRequest>), TutoriaError> {
    state.ensure_enabled()?;
    require_role(&user, UserRole::Student)?;

    if payload.tutor_id.trim().is_empty() {
        return Err(TutoriaError::ValidationError(
            "tutor_id is required".to_string(),
        ));
    }

    let request = SessionRequest::new(&payload.tutor_id, &user.user_id, payload.message);
    let request = state.repo.create(request).await?;
    info!(
        "Student {} opened request {} with tutor {}",
        user.user_id, request.id, request.tutor_id
    );
    state
        .notify(
            &request.tutor_id,
            "request_created",
            "You have a new session request",
        )
        .await;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Handler for a tutor to list their inbox, newest first.
#[axum::debug_handler]
pub async fn list_tutor_requests_handler(
    State(state): State<Arc<RequestsState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<SessionRequest>>, TutoriaError> {
    state.ensure_enabled()?;
    require_role(&user, UserRole::Tutor)?;
    let requests = state.repo.list_for_tutor(&user.user_id).await?;
    Ok(Json(requests))
}

/// Handler for the tutor to accept a pending request.
#[axum::debug_handler]
pub async fn accept_request_handler(
    State(state): State<Arc<RequestsState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<SessionRequest>, TutoriaError> {
    state.ensure_enabled()?;
    let mut request = state.owned_request(&user, &id).await?;
    request.accept()?;
    let request = state.repo.update(request).await?;

    info!("Tutor {} accepted request {id}", user.user_id);
    state
        .notify(
            &request.student_id,
            "request_accepted",
            "Your session request was accepted",
        )
        .await;
    Ok(Json(request))
}

/// Handler for the tutor to reject a pending request with a reason.
#[axum::debug_handler]
pub async fn reject_request_handler(
    State(state): State<Arc<RequestsState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<RejectPayload>,
) -> Result<Json<SessionRequest>, TutoriaError> {
    state.ensure_enabled()?;
    let mut request = state.owned_request(&user, &id).await?;
    request.reject(&payload.reason)?;
    let request = state.repo.update(request).await?;

    info!("Tutor {} rejected request {id}", user.user_id);
    state
        .notify(
            &request.student_id,
            "request_rejected",
            "Your session request was declined",
        )
        .await;
    Ok(Json(request))
}

/// Handler for the tutor to counter-propose a time window.
#[axum::debug_handler]
pub async fn reschedule_request_handler(
    State(state): State<Arc<RequestsState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<ReschedulePayload>,
) -> Result<Json<SessionRequest>, TutoriaError> {
    state.ensure_enabled()?;
    let mut request = state.owned_request(&user, &id).await?;
    request.reschedule(&payload.proposed_start, &payload.proposed_end)?;
    let request = state.repo.update(request).await?;

    info!("Tutor {} rescheduled request {id}", user.user_id);
    state
        .notify(
            &request.student_id,
            "request_rescheduled",
            "Your tutor proposed a different time",
        )
        .await;
    Ok(Json(request))
}
