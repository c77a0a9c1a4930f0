//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `devgate.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use devgate_adapter_http_axum::router::HttpConfig;
use devgate_adapter_upstream_reqwest::UpstreamConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Upstream metadata directory settings.
    pub upstream: UpstreamConfig,
    /// Router settings (API base path, static assets).
    pub http: HttpConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `devgate.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("devgate.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DEVGATE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("DEVGATE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("DEVGATE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("DEVGATE_UPSTREAM_URL") {
            self.upstream.base_url = val;
        }
        if let Ok(val) = std::env::var("DEVGATE_ENVIRONMENT_ID") {
            self.upstream.environment_id = val;
        }
        if let Ok(val) = std::env::var("DEVGATE_API_BASE_PATH") {
            self.http.api_base_path = val;
        }
        if let Ok(val) = std::env::var("DEVGATE_STATIC_DIR") {
            self.http.static_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("DEVGATE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "upstream base_url must not be empty".to_string(),
            ));
        }
        let base = &self.http.api_base_path;
        if !base.starts_with('/') || base.len() < 2 || base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "api_base_path must start with '/' and name a non-root prefix, got '{base}'"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "devgated=info,devgate=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.http.api_base_path, "/api");
        assert_eq!(config.http.static_dir, PathBuf::from("./public"));
        assert_eq!(
            config.upstream.base_url,
            "https://processing.dev.struxurewarecloud.com/api/processing"
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [upstream]
            base_url = 'http://localhost:9000'
            environment_id = 'test-env'

            [http]
            api_base_path = '/gateway'
            static_dir = 'assets'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.upstream.base_url, "http://localhost:9000");
        assert_eq!(config.upstream.environment_id, "test-env");
        assert_eq!(config.http.api_base_path, "/gateway");
        assert_eq!(config.http.static_dir, PathBuf::from("assets"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.http.api_base_path, "/api");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_upstream_url() {
        let mut config = Config::default();
        config.upstream.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_api_base_path_without_leading_slash() {
        let mut config = Config::default();
        config.http.api_base_path = "api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_root_api_base_path() {
        let mut config = Config::default();
        config.http.api_base_path = "/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_configuration() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }
}
