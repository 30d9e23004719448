//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Cookie carrying the backend access token for the browser session.
pub const SESSION_COOKIE: &str = "lth_session";

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_BACKEND_BASE_URL: &str = "http://localhost:8000";
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_CONNECT_TIMEOUT_SECS: u64 = 5;
    pub const DEV_REQUEST_TIMEOUT_SECS: u64 = 15;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the external results backend
    pub backend_base_url: String,
    /// Directory for static frontend assets (production only)
    pub static_dir: Option<PathBuf>,
    /// Connect timeout for backend requests, in seconds
    pub connect_timeout_secs: u64,
    /// Total request timeout for backend requests, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In development mode (RUST_ENV=development):
    /// - All variables have sensible defaults
    /// - Only RUST_ENV is required
    ///
    /// In production mode (RUST_ENV=production):
    /// - BACKEND_BASE_URL must be set to a non-development value
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `LTH_HOST`: Server host (default: 127.0.0.1)
    /// - `LTH_PORT`: Server port (default: 8080)
    /// - `BACKEND_BASE_URL`: Results backend base URL (required in production)
    /// - `LTH_STATIC_DIR`: Static assets directory for production
    /// - `LTH_CONNECT_TIMEOUT_SECS`: Backend connect timeout (default: 5)
    /// - `LTH_REQUEST_TIMEOUT_SECS`: Backend request timeout (default: 15)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Parse environment - required
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        // Load values with defaults
        let host = env::var("LTH_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("LTH_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("LTH_PORT must be a valid port number"))?;

        let backend_base_url = env::var("BACKEND_BASE_URL")
            .unwrap_or_else(|_| defaults::DEV_BACKEND_BASE_URL.to_string());

        let connect_timeout_secs = env::var("LTH_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DEV_CONNECT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("LTH_CONNECT_TIMEOUT_SECS must be a valid number")
            })?;

        let request_timeout_secs = env::var("LTH_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DEV_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("LTH_REQUEST_TIMEOUT_SECS must be a valid number")
            })?;

        let static_dir = env::var("LTH_STATIC_DIR").ok().map(PathBuf::from);

        let config = Config {
            environment,
            host,
            port,
            backend_base_url,
            static_dir,
            connect_timeout_secs,
            request_timeout_secs,
        };

        // Validate production configuration
        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.backend_base_url == defaults::DEV_BACKEND_BASE_URL {
            errors.push(format!(
                "BACKEND_BASE_URL is using development default '{}'. Set the production backend URL.",
                defaults::DEV_BACKEND_BASE_URL
            ));
        }

        if !self.backend_base_url.starts_with("http://")
            && !self.backend_base_url.starts_with("https://")
        {
            errors.push(format!(
                "BACKEND_BASE_URL '{}' is not an http(s) URL.",
                self.backend_base_url
            ));
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
