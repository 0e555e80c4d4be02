// --- File: crates/tutoria_requests/src/routes.rs ---

use crate::handlers::{
    accept_request_handler, create_request_handler, list_tutor_requests_handler,
    reject_request_handler, reschedule_request_handler, RequestsState,
};
use crate::storage::RequestRepository;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tutoria_common::auth::{auth_middleware, AuthState};
use tutoria_common::services::{BoxedError, NotificationSink};
use tutoria_config::AppConfig;

/// Creates a router containing all routes for the session request feature.
/// Every route requires a bearer token.
pub fn routes(
    config: Arc<AppConfig>,
    repo: Arc<dyn RequestRepository>,
    notifier: Option<Arc<dyn NotificationSink<Error = BoxedError>>>,
) -> Router {
    let auth_state = AuthState::new(config.clone());
    let state = Arc::new(RequestsState {
        config,
        repo,
        notifier,
    });

    Router::new()
        .route("/session-requests", post(create_request_handler))
        .route("/session-requests/tutor", get(list_tutor_requests_handler))
        .route("/session-requests/{id}/accept", post(accept_request_handler))
        .route("/session-requests/{id}/reject", post(reject_request_handler))
        .route(
            "/session-requests/{id}/reschedule",
            post(reschedule_request_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state)
}
