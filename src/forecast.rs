//! Current-conditions lookup against the `OpenMeteo` forecast API
//!
//! Fetches the current temperature and the near-term precipitation
//! probability for a coordinate pair and renders them into a summary
//! sentence. One outbound call per invocation, no retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::ForecastConfig;
use crate::error::SkycastError;
use crate::models::{Coordinates, CurrentConditions};

/// Error surfaced on transport failure or malformed response
pub const CONNECT_ERROR_MESSAGE: &str = "Unable to connect to weather service!";

const USER_AGENT: &str = concat!("Skycast/", env!("CARGO_PKG_VERSION"));

/// Produces a current-conditions summary for a coordinate pair
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch current conditions. All outcomes are delivered through the
    /// result; implementations must not panic past this boundary.
    async fn current_conditions(&self, coordinates: &Coordinates) -> Result<String, SkycastError>;
}

/// `OpenMeteo` forecast API client
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a new forecast client
    pub fn new(config: &ForecastConfig) -> Result<Self, SkycastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ForecastProvider for ForecastClient {
    async fn current_conditions(&self, coordinates: &Coordinates) -> Result<String, SkycastError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m&hourly=precipitation_probability&forecast_hours=1&timezone=auto",
            self.base_url, coordinates.latitude, coordinates.longitude
        );
        debug!("Forecast request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(
                "Forecast request for ({}) failed: {}",
                coordinates.format_coordinates(),
                e
            );
            SkycastError::forecast(CONNECT_ERROR_MESSAGE)
        })?;

        if !response.status().is_success() {
            warn!("Weather service returned status {}", response.status());
            return Err(SkycastError::forecast(CONNECT_ERROR_MESSAGE));
        }

        let body: ForecastResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse forecast response: {}", e);
            SkycastError::forecast(CONNECT_ERROR_MESSAGE)
        })?;

        let conditions = body.into_current_conditions().ok_or_else(|| {
            warn!(
                "Forecast response for ({}) is missing current conditions",
                coordinates.format_coordinates()
            );
            SkycastError::forecast(CONNECT_ERROR_MESSAGE)
        })?;

        info!(
            "Current conditions at {}: {:.1} degrees, {:.0}% rain chance",
            coordinates.label, conditions.temperature, conditions.precipitation_chance
        );
        Ok(conditions.summarize())
    }
}

/// Forecast response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentData>,
    hourly: Option<HourlyData>,
}

/// Current weather data from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct CurrentData {
    #[serde(rename = "temperature_2m")]
    temperature: f32,
}

/// Hourly weather data from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct HourlyData {
    precipitation_probability: Option<Vec<f32>>,
}

impl ForecastResponse {
    /// Fold the response into a conditions snapshot, or `None` when the
    /// payload is missing either required series.
    fn into_current_conditions(self) -> Option<CurrentConditions> {
        let current = self.current?;
        let precipitation_chance = self
            .hourly
            .and_then(|hourly| hourly.precipitation_probability)
            .and_then(|series| series.into_iter().next())?;

        Some(CurrentConditions {
            temperature: current.temperature,
            precipitation_chance,
        })
    }
}
