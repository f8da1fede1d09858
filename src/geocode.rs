//! Address resolution against the `OpenMeteo` geocoding API
//!
//! Converts a free-text address into coordinates plus a normalized place
//! label. One outbound call per invocation, no retries, no caching of
//! prior lookups.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::GeocodingConfig;
use crate::error::SkycastError;
use crate::models::Coordinates;

/// Error surfaced when the service returns zero matches
pub const NOT_FOUND_MESSAGE: &str = "Unable to find location. Try another search.";
/// Error surfaced on transport failure or malformed response
pub const CONNECT_ERROR_MESSAGE: &str = "Unable to connect to location service!";

const USER_AGENT: &str = concat!("Skycast/", env!("CARGO_PKG_VERSION"));

/// Resolves a free-text address into coordinates
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolve an address. All outcomes are delivered through the result;
    /// implementations must not panic past this boundary.
    async fn resolve(&self, address: &str) -> Result<Coordinates, SkycastError>;
}

/// `OpenMeteo` geocoding API client
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    result_count: u8,
}

impl GeocodeClient {
    /// Create a new geocoding client
    pub fn new(config: &GeocodingConfig) -> Result<Self, SkycastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            result_count: config.result_count,
        })
    }
}

#[async_trait]
impl AddressResolver for GeocodeClient {
    async fn resolve(&self, address: &str) -> Result<Coordinates, SkycastError> {
        let url = format!(
            "{}/v1/search?name={}&count={}&language=en&format=json",
            self.base_url,
            urlencoding::encode(address),
            self.result_count
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Geocoding request for '{}' failed: {}", address, e);
            SkycastError::geocoding(CONNECT_ERROR_MESSAGE)
        })?;

        if !response.status().is_success() {
            warn!("Geocoding service returned status {}", response.status());
            return Err(SkycastError::geocoding(CONNECT_ERROR_MESSAGE));
        }

        let body: GeocodingResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse geocoding response for '{}': {}", address, e);
            SkycastError::geocoding(CONNECT_ERROR_MESSAGE)
        })?;

        // Use the first (best) result
        let Some(first) = body.results.unwrap_or_default().into_iter().next() else {
            warn!("No geocoding results for '{}'", address);
            return Err(SkycastError::geocoding(NOT_FOUND_MESSAGE));
        };

        let coordinates = Coordinates::from(first);
        info!(
            "Geocoded '{}' to {} ({})",
            address,
            coordinates.label,
            coordinates.format_coordinates()
        );
        Ok(coordinates)
    }
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl From<GeocodingResult> for Coordinates {
    fn from(result: GeocodingResult) -> Self {
        let mut label = result.name;
        if let Some(admin1) = result
            .admin1
            .filter(|region| !region.is_empty() && *region != label)
        {
            label.push_str(", ");
            label.push_str(&admin1);
        }
        if let Some(country) = result.country.filter(|country| !country.is_empty()) {
            label.push_str(", ");
            label.push_str(&country);
        }

        Coordinates {
            latitude: result.latitude,
            longitude: result.longitude,
            label,
        }
    }
}
