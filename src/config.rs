//! Server configuration
//!
//! Values come from CLI flags, falling back to environment variables and then
//! to defaults. The fullstack server reads environment only (`from_env`), the
//! standalone API server also accepts flags.

use clap::Parser;
use once_cell::sync::OnceCell;
use std::time::Duration;

use crate::shared::errors::{AppError, Result};

static CONFIG: OnceCell<ServerConfig> = OnceCell::new();

#[derive(Debug, Clone, Parser)]
#[command(name = "booking-admin", about = "Bookings admin server")]
pub struct ServerConfig {
    /// Base URL of the upstream bookings API
    #[arg(long, env = "BOOKINGS_API_URL", default_value = "http://localhost:4000")]
    pub api_url: String,

    /// Path of the bookings listing on the upstream API
    #[arg(long, env = "BOOKINGS_API_PATH", default_value = "/bookings")]
    pub api_path: String,

    /// Bearer token forwarded to the upstream API
    #[arg(long, env = "BOOKINGS_API_TOKEN")]
    pub api_token: Option<String>,

    /// Seconds an upstream response stays cached, 0 disables caching
    #[arg(long, env = "BOOKINGS_CACHE_TTL_SECS", default_value_t = 30)]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout in seconds
    #[arg(long, env = "BOOKINGS_API_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Listen port of the standalone API server
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables and defaults only, ignoring process arguments
    pub fn from_env() -> Result<Self> {
        let config = Self::try_parse_from(["booking-admin"])
            .map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(AppError::Config("api_url must not be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if !self.api_path.starts_with('/') {
            return Err(AppError::Config(format!(
                "api_path must start with '/', got '{}'",
                self.api_path
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Full URL of the upstream bookings listing (no query)
    pub fn bookings_url(&self) -> String {
        format!("{}{}", self.api_url.trim().trim_end_matches('/'), self.api_path)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        match self.cache_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Install the process-wide configuration. The first call wins.
pub fn init(config: ServerConfig) -> Result<&'static ServerConfig> {
    config.validate()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Process-wide configuration, read from the environment if `init` never ran
pub fn get() -> Result<&'static ServerConfig> {
    CONFIG.get_or_try_init(ServerConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["booking-admin"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--api-url",
            "https://api.example.com/",
            "--api-path",
            "/v1/bookings",
            "--api-token",
            "secret",
            "--cache-ttl-secs",
            "0",
        ]);

        assert!(config.validate().is_ok());
        assert_eq!(config.bookings_url(), "https://api.example.com/v1/bookings");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.cache_ttl(), None);
    }

    #[test]
    fn test_rejects_invalid_url() {
        let config = parse(&["--api-url", "api.example.com"]);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = parse(&["--api-url", "   "]);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_relative_path_and_zero_timeout() {
        let config = parse(&["--api-url", "http://localhost:4000", "--api-path", "bookings"]);
        assert!(config.validate().is_err());

        let config = parse(&["--api-url", "http://localhost:4000", "--timeout-secs", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_durations() {
        let config = parse(&[
            "--api-url",
            "http://localhost:4000",
            "--cache-ttl-secs",
            "45",
            "--timeout-secs",
            "3",
        ]);
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(45)));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
