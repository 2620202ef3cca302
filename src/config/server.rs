use crate::core::{AppError, Result};

/// Where and how wide the HTTP API listens when started with `serve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// Read SERVER_HOST, SERVER_PORT and SERVER_WORKERS; missing keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Configuration(format!("Invalid SERVER_PORT '{}'", raw)))?,
            None => 8080,
        };

        let workers = match lookup("SERVER_WORKERS") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::Configuration(format!("Invalid SERVER_WORKERS '{}'", raw))
            })?,
            None => default_workers(),
        };

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            workers,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::Configuration(
                "SERVER_HOST must not be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// One worker per available core; the handlers block on file I/O only briefly
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
