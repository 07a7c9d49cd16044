// --- File: crates/bumble_config/src/lib.rs ---

use config::{Config, ConfigError, Environment, File};

pub mod models;
pub use models::{AppConfig, GcalConfig, GmailConfig, ServerConfig};

/// Loads the application configuration.
///
/// Layering, lowest precedence first: serde defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, then `BUMBLE__`-prefixed environment variables
/// (e.g. `BUMBLE__GCAL__CALENDAR_ID`). A `.env` file is read before the
/// environment source is applied.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "default".to_string());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(Environment::with_prefix("BUMBLE").separator("__"))
        .build()?
        .try_deserialize()
}
