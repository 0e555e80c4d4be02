// --- File: crates/tutoria_notifications/src/routes.rs ---

use crate::handlers::{
    create_notification_handler, list_notifications_handler, mark_all_read_handler,
    unread_notifications_handler, NotificationsState,
};
use crate::logic::NotificationRepository;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tutoria_common::auth::{auth_middleware, AuthState};
use tutoria_config::AppConfig;

/// Creates a router containing all routes for the notifications feature.
/// Every route requires a bearer token; all operations act on the caller's
/// own feed.
pub fn routes(config: Arc<AppConfig>, repo: Arc<dyn NotificationRepository>) -> Router {
    let auth_state = AuthState::new(config.clone());
    let state = Arc::new(NotificationsState { config, repo });

    Router::new()
        .route(
            "/notifications",
            get(list_notifications_handler).post(create_notification_handler),
        )
        .route("/notifications/unread", get(unread_notifications_handler))
        .route("/notifications/mark-all-read", post(mark_all_read_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state)
}
