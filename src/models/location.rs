//! Location model for resolved geographic coordinates

use serde::{Deserialize, Serialize};

/// Geographic coordinates with a normalized place label
///
/// Produced by address resolution, consumed by the forecast lookup.
/// Created fresh per request and never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Normalized location label (e.g. "London, England, United Kingdom")
    pub label: String,
}

impl Coordinates {
    /// Create new coordinates
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            label: label.into(),
        }
    }

    /// Format coordinates as a short string for logging
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
