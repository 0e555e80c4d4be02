// --- File: crates/tutoria_common/src/lib.rs ---

// Declare modules within this crate
pub mod auth; // Bearer-token verification middleware
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod handlers; // HTTP request handlers
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models
pub mod routes; // Route definitions
pub mod services; // Service abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, forbidden, internal_error, not_found, validation_error, Context,
    HttpStatusCode, TutoriaError,
};

// Re-export HTTP utilities for easier access
pub use http::{handle_json_result, map_json_error, IntoHttpResponse};

// Re-export auth utilities for easier access
pub use auth::{auth_middleware, require_role, sign_token, verify_token, AuthState};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

// Conditionally re-export feature-specific functions
#[cfg(feature = "availability")]
pub use features::is_availability_enabled;

#[cfg(feature = "sessions")]
pub use features::is_sessions_enabled;

#[cfg(feature = "requests")]
pub use features::is_requests_enabled;

#[cfg(feature = "notifications")]
pub use features::is_notifications_enabled;

#[cfg(feature = "ratings")]
pub use features::is_ratings_enabled;
