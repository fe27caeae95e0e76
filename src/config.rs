//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:9000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `SEARCH_DELAY_MS` - Delay of the slow search demo (default: 3000, max: 60000)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Upper bound for `SEARCH_DELAY_MS`.
pub const MAX_SEARCH_DELAY_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    /// Delay of the slow search demo in milliseconds.
    pub search_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            search_delay_ms: 3000,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let search_delay_ms = env::var("SEARCH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.search_delay_ms);

        Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            search_delay_ms,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `static_dir` is empty
    /// - `search_delay_ms` exceeds [`MAX_SEARCH_DELAY_MS`]
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        if self.search_delay_ms > MAX_SEARCH_DELAY_MS {
            anyhow::bail!(
                "SEARCH_DELAY_MS is too large (max: {}), got {}",
                MAX_SEARCH_DELAY_MS,
                self.search_delay_ms
            );
        }

        Ok(())
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static directory: {}", self.static_dir);
        tracing::info!("  Search delay: {}ms", self.search_delay_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects `.env` to be loaded already (e.g. via `dotenvy::dotenv()` in
/// `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "9000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:9000".to_string();
        config.static_dir = " ".to_string();
        assert!(config.validate().is_err());

        config.static_dir = "static".to_string();
        config.search_delay_ms = MAX_SEARCH_DELAY_MS + 1;
        assert!(config.validate().is_err());

        config.search_delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("STATIC_DIR");
            env::remove_var("SEARCH_DELAY_MS");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.search_delay(), Duration::from_secs(3));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("SEARCH_DELAY_MS", "250");
            env::set_var("STATIC_DIR", "/srv/static");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.search_delay_ms, 250);
        assert_eq!(config.static_dir, "/srv/static");

        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("SEARCH_DELAY_MS");
            env::remove_var("STATIC_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_delay_falls_back() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            env::set_var("SEARCH_DELAY_MS", "soon");
        }

        assert_eq!(Config::from_env().search_delay_ms, 3000);

        unsafe {
            env::remove_var("SEARCH_DELAY_MS");
        }
    }
}
