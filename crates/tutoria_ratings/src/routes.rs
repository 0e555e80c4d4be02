// --- File: crates/tutoria_ratings/src/routes.rs ---

use crate::handlers::{
    create_rating_handler, list_ratings_handler, mark_helpful_handler, tutor_ratings_handler,
    RatingsState,
};
use crate::storage::RatingRepository;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tutoria_common::auth::{auth_middleware, AuthState};
use tutoria_config::AppConfig;

/// Creates a router containing all routes for the ratings feature.
/// Every route requires a bearer token.
pub fn routes(config: Arc<AppConfig>, repo: Arc<dyn RatingRepository>) -> Router {
    let auth_state = AuthState::new(config.clone());
    let state = Arc::new(RatingsState { config, repo });

    Router::new()
        .route(
            "/ratings",
            get(list_ratings_handler).post(create_rating_handler),
        )
        .route("/ratings/tutor/{tutor_id}", get(tutor_ratings_handler))
        .route("/ratings/{id}/helpful", post(mark_helpful_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state)
}
