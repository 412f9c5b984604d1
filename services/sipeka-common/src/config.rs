//! Configuration management for Sipeka services.
//!
//! All Sipeka services share a unified configuration file at `~/.sipeka/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Explicit config file values
//! 2. Environment variables (SIPEKA_* prefix)
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! ## Service Ports
//! - `SIPEKA_ANALYSIS_PORT` → services.analysis.port
//! - `SIPEKA_BIND_ADDRESS` → network.bind
//!
//! ## Storage
//! - `SUPABASE_URL` → storage.url
//! - `SUPABASE_ANON_KEY` → storage.anon_key
//!
//! ## Observability
//! - `SIPEKA_LOG_LEVEL` → observability.log_level

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".sipeka"),
        |dirs| dirs.home_dir().join(".sipeka"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Network Configuration (Global bind address)
// ============================================================================

/// Global network configuration.
///
/// Controls the bind address for all services. Default is `127.0.0.1` (local only).
/// Set to `0.0.0.0` to allow remote access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Bind address for all services.
    /// Default: "127.0.0.1" (conservative, local only)
    /// Set to "0.0.0.0" for remote access
    #[serde(default = "default_bind_address")]
    pub bind: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

// ============================================================================
// Services Port Configuration
// ============================================================================

/// Service port configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServicesConfig {
    /// Indicator analysis service
    #[serde(default)]
    pub analysis: ServicePortConfig,
}

/// Individual service port configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServicePortConfig {
    /// Port number for the service
    #[serde(default)]
    pub port: Option<u16>,
}

// ============================================================================
// Storage Configuration (Supabase / PostgREST)
// ============================================================================

/// Remote relational store configuration.
///
/// The agency's indicator data lives in a Supabase project; services read
/// it through the PostgREST endpoint under `{url}/rest/v1/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the Supabase project (no trailing slash required)
    #[serde(default = "default_storage_url")]
    pub url: String,

    /// Anon/service API key sent as `apikey` and bearer token
    #[serde(default)]
    pub anon_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: default_storage_url(),
            anon_key: String::new(),
        }
    }
}

fn default_storage_url() -> String {
    "http://127.0.0.1:54321".into()
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Unified configuration for Sipeka services.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Global network configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// Service port configuration
    #[serde(default)]
    pub services: ServicesConfig,

    /// Remote store configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable fallbacks.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("SIPEKA_ANALYSIS_PORT") {
            if let Ok(p) = port.parse() {
                self.services.analysis.port = Some(p);
            }
        }

        if let Ok(bind) = std::env::var("SIPEKA_BIND_ADDRESS") {
            self.network.bind = bind;
        }

        if let Ok(url) = std::env::var("SUPABASE_URL") {
            self.storage.url = url;
        }
        if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
            self.storage.anon_key = key;
        }

        if let Ok(level) = std::env::var("SIPEKA_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.network.bind, "127.0.0.1");
        assert_eq!(config.services.analysis.port, None);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "services": {{ "analysis": {{ "port": 4451 }} }},
                "storage": {{ "url": "https://example.supabase.co", "anon_key": "anon" }},
                "observability": {{ "log_level": "debug" }}
            }}"#
        )
        .unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.services.analysis.port, Some(4451));
        assert_eq!(config.storage.url, "https://example.supabase.co");
        assert_eq!(config.storage.anon_key, "anon");
        assert_eq!(config.observability.log_level, "debug");
        // Unspecified sections fall back to defaults
        assert_eq!(config.network.bind, "127.0.0.1");
    }

    #[test]
    fn test_load_from_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(Config::load_from(&file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.storage.url, config.storage.url);
    }
}
