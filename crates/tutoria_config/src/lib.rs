// --- File: crates/tutoria_config/src/lib.rs ---
pub mod models;

pub use models::*;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` exactly once per process. Safe to call from every crate that
/// touches configuration; later calls are no-ops.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the application configuration.
///
/// Sources, in order of precedence (later wins):
/// 1. `config/default.{yml,toml,json}` (optional)
/// 2. `config/{RUN_MODE}.{yml,toml,json}` (optional, e.g. RUN_MODE=production)
/// 3. Environment variables prefixed with `APP`, `__`-separated
///    (e.g. `APP_SERVER__PORT=8080`, `APP_AUTH__TOKEN_SECRET=...`)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
