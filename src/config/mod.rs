use crate::core::{AppError, Result};
use std::env;

pub mod server;
pub mod storage;

pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; missing keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            app: AppConfig {
                env: var("APP_ENV", "development"),
                log_level: var("LOG_LEVEL", "info"),
                log_format: var("LOG_FORMAT", "text").to_lowercase(),
            },
            storage: StorageConfig::new(var("DATA_DIR", "data")),
            server: ServerConfig::from_lookup(&lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "DATA_DIR must not be empty".to_string(),
            ));
        }

        if !matches!(self.app.log_format.as_str(), "text" | "json") {
            return Err(AppError::Configuration(format!(
                "Unknown LOG_FORMAT '{}', expected 'text' or 'json'",
                self.app.log_format
            )));
        }

        Ok(())
    }

    /// Default tracing filter when RUST_LOG is not set
    pub fn log_filter(&self) -> String {
        format!("minibrs={},actix_web=info", self.app.log_level)
    }

    pub fn json_logs(&self) -> bool {
        self.app.log_format == "json"
    }
}
