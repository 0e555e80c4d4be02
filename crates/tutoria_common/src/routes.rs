// --- File: crates/tutoria_common/src/routes.rs ---

use axum::{routing::get, Router};

use crate::handlers::health_handler;

/// Creates a router containing common routes that can be used across the application.
///
/// # Returns
/// A router configured with common routes.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_handler))
}
