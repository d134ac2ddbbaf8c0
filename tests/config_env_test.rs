//! Config environment variable tests
//!
//! These tests verify that Config::from_env() correctly reads and applies
//! environment variable overrides. Note that Config::from_env() also loads
//! from .env file via dotenvy, so these tests focus on override behavior.
//!
//! Tests use #[serial] to prevent race conditions with shared env vars.

use findash::config::{Config, LogFormat};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_config_defaults() {
    env::remove_var("AI_SERVICE_URL");
    env::remove_var("SESSION_PATH");
    env::remove_var("REQUEST_TIMEOUT_MS");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_FORMAT");

    let config = Config::from_env().unwrap();
    assert_eq!(config.service.base_url, "http://localhost:8000");
    assert_eq!(config.session.path.to_str().unwrap(), "./data/session.json");
    assert_eq!(config.request.timeout_ms, 30000);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_config_custom_service_url() {
    env::set_var("AI_SERVICE_URL", "https://analysis.internal:9000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.service.base_url, "https://analysis.internal:9000");

    env::remove_var("AI_SERVICE_URL");
}

#[test]
#[serial]
fn test_config_empty_service_url_is_an_error() {
    env::set_var("AI_SERVICE_URL", "  ");

    let result = Config::from_env();
    assert!(result.is_err());

    env::remove_var("AI_SERVICE_URL");
}

#[test]
#[serial]
fn test_config_custom_session_path() {
    env::set_var("SESSION_PATH", "/tmp/findash-session.json");

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.session.path.to_str().unwrap(),
        "/tmp/findash-session.json"
    );

    env::remove_var("SESSION_PATH");
}

#[test]
#[serial]
fn test_config_custom_timeout() {
    env::set_var("REQUEST_TIMEOUT_MS", "60000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 60000);

    env::remove_var("REQUEST_TIMEOUT_MS");
}

#[test]
#[serial]
fn test_config_unparsable_timeout_falls_back_to_default() {
    env::set_var("REQUEST_TIMEOUT_MS", "soon");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 30000);

    env::remove_var("REQUEST_TIMEOUT_MS");
}

#[test]
#[serial]
fn test_config_json_log_format() {
    env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    env::remove_var("LOG_FORMAT");
}
