// --- File: crates/tutoria_notifications/src/dispatcher.rs ---
//! Bridges the notification store into the cross-feature `NotificationSink`
//! seam the sessions and requests crates push through.

use crate::logic::{Notification, NotificationRepository};
use std::sync::Arc;
use tutoria_common::services::{BoxFuture, BoxedError, NotificationResult, NotificationSink};

/// Appends pushed notifications to the stored feed.
#[derive(Clone)]
pub struct NotificationDispatcher {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationDispatcher {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }
}

impl NotificationSink for NotificationDispatcher {
    type Error = BoxedError;

    fn push(
        &self,
        user_id: &str,
        kind: &str,
        message: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let notification = Notification::new(user_id, kind, message);
        Box::pin(async move {
            let stored = self
                .repo
                .create(notification)
                .await
                .map_err(|e| BoxedError(Box::new(e)))?;
            Ok(NotificationResult {
                id: stored.id,
                status: "stored".to_string(),
            })
        })
    }
}
