// --- File: crates/tutoria_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via APP_DATABASE__URL or DATABASE_URL
}

// --- Auth Config ---
// Token issuance lives in the external identity service; this service only
// verifies signatures, so the shared secret is the whole configuration.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuthConfig {
    pub token_secret: Option<String>, // Loaded via APP_AUTH__TOKEN_SECRET or TUTORIA_TOKEN_SECRET
}

// --- Booking Config ---
// Engine parameters for the availability calendar and slot generator.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// Rolling calendar horizon, in days from today.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,
    /// Fixed slot start alignment, independent of the requested duration.
    #[serde(default = "default_slot_step_minutes")]
    pub slot_step_minutes: i64,
    /// Fallback open window used when a tutor has no configured hours.
    #[serde(default = "default_day_start")]
    pub default_day_start: String,
    #[serde(default = "default_day_end")]
    pub default_day_end: String,
    /// IANA time zone used to anchor "today" for the rolling horizon.
    pub time_zone: Option<String>,
}

fn default_horizon_days() -> i64 {
    60
}
fn default_slot_step_minutes() -> i64 {
    30
}
fn default_day_start() -> String {
    "09:00".to_string()
}
fn default_day_end() -> String {
    "17:00".to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            slot_step_minutes: default_slot_step_minutes(),
            default_day_start: default_day_start(),
            default_day_end: default_day_end(),
            time_zone: None,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_availability: bool,
    #[serde(default)]
    pub use_sessions: bool,
    #[serde(default)]
    pub use_requests: bool,
    #[serde(default)]
    pub use_notifications: bool,
    #[serde(default)]
    pub use_ratings: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub booking: Option<BookingConfig>,
}

impl AppConfig {
    /// Booking parameters, falling back to the built-in defaults when the
    /// section is absent from the config file.
    pub fn booking(&self) -> BookingConfig {
        self.booking.clone().unwrap_or_default()
    }
}
