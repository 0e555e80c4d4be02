// --- File: crates/tutoria_sessions/src/routes.rs ---

use crate::handlers::{
    cancel_session_handler, confirm_session_handler, create_session_handler, end_session_handler,
    get_session_handler, list_sessions_handler, start_session_handler, SessionsState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tutoria_common::auth::{auth_middleware, AuthState};
use tutoria_common::services::{BoxedError, NotificationSink};
use tutoria_config::AppConfig;
use tutoria_db::SessionRepository;

/// Creates a router containing all routes for the sessions feature.
/// Every route requires a bearer token.
pub fn routes<R>(
    config: Arc<AppConfig>,
    repo: R,
    notifier: Option<Arc<dyn NotificationSink<Error = BoxedError>>>,
) -> Router
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthState::new(config.clone());
    let state = Arc::new(SessionsState {
        config,
        repo,
        notifier,
    });

    Router::new()
        .route(
            "/sessions",
            get(list_sessions_handler::<R>).post(create_session_handler::<R>),
        )
        .route("/sessions/{id}", get(get_session_handler::<R>))
        .route("/sessions/{id}/confirm", post(confirm_session_handler::<R>))
        .route("/sessions/{id}/start", post(start_session_handler::<R>))
        .route("/sessions/{id}/end", post(end_session_handler::<R>))
        .route("/sessions/{id}/cancel", post(cancel_session_handler::<R>))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state)
}
