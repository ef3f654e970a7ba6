//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// External expense API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Display preferences for the terminal front-end.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// External REST API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// ISO 4217 currency code used when printing amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// How far back the "recent expenses" panel looks.
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,
    /// Maximum rows in the "recent expenses" panel.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            recent_days: default_recent_days(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_recent_days() -> u32 {
    30
}

fn default_recent_limit() -> usize {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `EXPENSA__SECTION__KEY`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("EXPENSA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
