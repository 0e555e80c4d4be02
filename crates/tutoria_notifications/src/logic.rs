// --- File: crates/tutoria_notifications/src/logic.rs ---
//! The notification entity and its storage seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tutoria_common::services::BoxFuture;
use tutoria_common::TutoriaError;
use uuid::Uuid;

/// One entry in a user's notification feed.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    /// Machine-readable category, e.g. `session_confirmed`.
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: &str, kind: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind: kind.to_string(),
            message: message.to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// Repository for notification feeds.
pub trait NotificationRepository: Send + Sync {
    fn create(&self, notification: Notification) -> BoxFuture<'_, Notification, TutoriaError>;

    /// The user's feed, newest first.
    fn list_for_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Notification>, TutoriaError>;

    /// The unread part of the feed, newest first.
    fn list_unread(&self, user_id: &str) -> BoxFuture<'_, Vec<Notification>, TutoriaError>;

    /// Mark the whole feed read, returning how many entries flipped.
    fn mark_all_read(&self, user_id: &str) -> BoxFuture<'_, u64, TutoriaError>;
}

/// In-memory notification store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn sorted_for_user(&self, user_id: &str, unread_only: bool) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .lock()
            .iter()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.read))
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }
}

impl NotificationRepository for InMemoryNotificationRepository {
    fn create(&self, notification: Notification) -> BoxFuture<'_, Notification, TutoriaError> {
        Box::pin(async move {
            self.lock().push(notification.clone());
            Ok(notification)
        })
    }

    fn list_for_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Notification>, TutoriaError> {
        let user_id = user_id.to_string();
        Box::pin(async move { Ok(self.sorted_for_user(&user_id, false)) })
    }

    fn list_unread(&self, user_id: &str) -> BoxFuture<'_, Vec<Notification>, TutoriaError> {
        let user_id = user_id.to_string();
        Box::pin(async move { Ok(self.sorted_for_user(&user_id, true)) })
    }

    fn mark_all_read(&self, user_id: &str) -> BoxFuture<'_, u64, TutoriaError> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let mut updated = 0;
            for notification in self.lock().iter_mut() {
                if notification.user_id == user_id && !notification.read {
                    notification.read = true;
                    updated += 1;
                }
            }
            Ok(updated)
        })
    }
}
