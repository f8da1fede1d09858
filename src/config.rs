//! Configuration management for the `Skycast` application
//!
//! Handles loading configuration from an optional file and environment
//! variables, and provides validation for all configuration settings.
//! There is no process-wide singleton: the config is built once at startup
//! and threaded explicitly into the router state.

use crate::SkycastError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration structure for the `Skycast` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkycastConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Site presentation settings
    #[serde(default)]
    pub site: SiteConfig,
    /// Geocoding service configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Forecast service configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Site presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Author name shown in page footers
    #[serde(default = "default_site_author")]
    pub author: String,
}

/// Geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Number of candidate results to request
    #[serde(default = "default_geocoding_result_count")]
    pub result_count: u8,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
}

/// Forecast service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Base URL for the weather API
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
}

// Default value functions
fn default_server_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_site_author() -> String {
    "Skycast Team".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_geocoding_result_count() -> u8 {
    5
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_request_timeout() -> u32 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: default_site_author(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            result_count: default_geocoding_result_count(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_base_url(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for SkycastConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            geocoding: GeocodingConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

impl SkycastConfig {
    /// Load configuration from `config/default.toml` (if present) and
    /// `SKYCAST_`-prefixed environment variables.
    ///
    /// Environment variables use `__` as the section separator, e.g.
    /// `SKYCAST_SERVER__PORT=8080`.
    pub fn load() -> Result<Self, SkycastError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("SKYCAST").separator("__"))
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to load configuration: {e}")))?;

        let config: SkycastConfig = settings
            .try_deserialize()
            .map_err(|e| SkycastError::config(format!("Invalid configuration: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), SkycastError> {
        if self.geocoding.base_url.is_empty() {
            return Err(SkycastError::config("geocoding.base_url must not be empty"));
        }
        if self.forecast.base_url.is_empty() {
            return Err(SkycastError::config("forecast.base_url must not be empty"));
        }
        if self.geocoding.result_count == 0 {
            return Err(SkycastError::config(
                "geocoding.result_count must be at least 1",
            ));
        }
        if self.geocoding.timeout_seconds == 0 || self.forecast.timeout_seconds == 0 {
            return Err(SkycastError::config("timeout_seconds must be at least 1"));
        }
        Ok(())
    }
}
