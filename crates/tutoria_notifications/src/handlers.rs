// File: crates/tutoria_notifications/src/handlers.rs
use crate::logic::{Notification, NotificationRepository};
use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use tutoria_common::models::AuthUser;
use tutoria_common::TutoriaError;
use tutoria_config::AppConfig;

// Define shared state needed by notification handlers
#[derive(Clone)]
pub struct NotificationsState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn NotificationRepository>,
}

impl NotificationsState {
    fn ensure_enabled(&self) -> Result<(), TutoriaError> {
        if self.config.use_notifications {
            Ok(())
        } else {
            Err(TutoriaError::ConfigError(
                "Notifications service is disabled.".to_string(),
            ))
        }
    }
}

// --- Requests / Responses ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Debug)]
pub struct CreateNotificationPayload {
    /// Machine-readable category, e.g. `reminder`.
    pub kind: String,
    pub message: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct UnreadResponse {
    pub count: usize,
    pub notifications: Vec<Notification>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

// --- Handlers ---

/// Handler to list the caller's feed, newest first.
#[axum::debug_handler]
pub async fn list_notifications_handler(
    State(state): State<Arc<NotificationsState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Notification>>, TutoriaError> {
    state.ensure_enabled()?;
    let notifications = state.repo.list_for_user(&user.user_id).await?;
    Ok(Json(notifications))
}

/// Handler to append a notification to the caller's own feed. Cross-user
/// notifications only happen server-side, through the sink.
#[axum::debug_handler]
pub async fn create_notification_handler(
    State(state): State<Arc<NotificationsState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateNotificationPayload>,
) -> Result<(StatusCode, Json<Notification>), TutoriaError> {
    state.ensure_enabled()?;
    if payload.kind.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(TutoriaError::ValidationError(
            "kind and message are required".to_string(),
        ));
    }
    let notification = Notification::new(&user.user_id, &payload.kind, &payload.message);
    let notification = state.repo.create(notification).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// Handler for the unread part of the caller's feed.
#[axum::debug_handler]
pub async fn unread_notifications_handler(
    State(state): State<Arc<NotificationsState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UnreadResponse>, TutoriaError> {
    state.ensure_enabled()?;
    let notifications = state.repo.list_unread(&user.user_id).await?;
    Ok(Json(UnreadResponse {
        count: notifications.len(),
        notifications,
    }))
}

/// Handler to mark the caller's whole feed read.
#[axum::debug_handler]
pub async fn mark_all_read_handler(
    State(state): State<Arc<NotificationsState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MarkAllReadResponse>, TutoriaError> {
    state.ensure_enabled()?;
    let updated = state.repo.mark_all_read(&user.user_id).await?;
    debug!("Marked {updated} notifications read for {}", user.user_id);
    Ok(Json(MarkAllReadResponse { updated }))
}
