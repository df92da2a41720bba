//! Configuration module - environment variable parsing

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Server binding address
    pub server_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Allowed client origins for CORS (comma-separated)
    pub client_origin: String,
    /// Pixel distance covered by one velocity unit per tick. Must match the
    /// client's step size or every reconstructed position lands off-grid.
    pub grid_step: i32,
    /// Directory the game client is served from
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        // Render provides PORT env var, fall back to SERVER_ADDR or default
        let server_addr = if let Ok(port) = env::var("PORT") {
            format!("0.0.0.0:{}", port)
                .parse()
                .map_err(|_| ConfigError::InvalidAddress)?
        } else if let Ok(addr) = env::var("SERVER_ADDR") {
            addr.parse().map_err(|_| ConfigError::InvalidAddress)?
        } else {
            defaults.server_addr
        };

        let grid_step = match env::var("GRID_STEP") {
            Ok(raw) => {
                let step: i32 = raw.parse().map_err(|_| ConfigError::InvalidGridStep)?;
                if step <= 0 {
                    return Err(ConfigError::InvalidGridStep);
                }
                step
            }
            Err(_) => defaults.grid_step,
        };

        Ok(Self {
            server_addr,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            client_origin: env::var("CLIENT_ORIGIN").unwrap_or(defaults.client_origin),
            grid_step,
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 8081)),
            log_level: "info".to_string(),
            client_origin: "http://localhost:8080".to_string(),
            grid_step: 16,
            static_dir: "./static".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server address format")]
    InvalidAddress,

    #[error("GRID_STEP must be a positive integer")]
    InvalidGridStep,
}
