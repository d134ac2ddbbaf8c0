//! Configuration management for the dashboard client.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Analysis service endpoint.
    pub service: ServiceConfig,
    /// Session file location.
    pub session: SessionConfig,
    /// Logging level and format.
    pub logging: LoggingConfig,
    /// Outbound request behavior.
    pub request: RequestConfig,
}

/// Analysis service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the analysis service.
    pub base_url: String,
}

/// Session file configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path of the durable session file.
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug").
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable output.
    Pretty,
    /// Structured JSON output.
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            env::var("AI_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        if base_url.trim().is_empty() {
            return Err(AppError::Config {
                message: "AI_SERVICE_URL must not be empty".to_string(),
            });
        }

        let service = ServiceConfig { base_url };

        let session = SessionConfig {
            path: PathBuf::from(
                env::var("SESSION_PATH").unwrap_or_else(|_| "./data/session.json".to_string()),
            ),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30000),
        };

        Ok(Config {
            service,
            session,
            logging,
            request,
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}
