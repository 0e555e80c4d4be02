//! Feature flag handling for the Tutoria application.
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values (`use_*` in AppConfig)
//!
//! A feature is live only when it is compiled in AND its runtime flag is set.
//! The per-feature helpers below check the runtime side.

use std::sync::Arc;
use tutoria_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled(_config: &Arc<AppConfig>, use_feature: bool) -> bool {
    use_feature
}

/// Check if the availability feature is enabled at runtime.
#[cfg(feature = "availability")]
pub fn is_availability_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_availability)
}

/// Check if the sessions feature is enabled at runtime.
#[cfg(feature = "sessions")]
pub fn is_sessions_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_sessions)
}

/// Check if the session-requests feature is enabled at runtime.
#[cfg(feature = "requests")]
pub fn is_requests_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_requests)
}

/// Check if the notifications feature is enabled at runtime.
#[cfg(feature = "notifications")]
pub fn is_notifications_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_notifications)
}

/// Check if the ratings feature is enabled at runtime.
#[cfg(feature = "ratings")]
pub fn is_ratings_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_ratings)
}
