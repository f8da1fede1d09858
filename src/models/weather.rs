//! Weather models: current conditions and the weather lookup payload

use serde::{Deserialize, Serialize};

/// Result of a weather lookup, serialized directly as the response body.
///
/// Exactly one of the two shapes is ever produced: the full forecast
/// triple or a single error string. There are no partial results.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum WeatherReport {
    /// Successful lookup
    Conditions {
        /// Human-readable current-conditions summary
        forecast: String,
        /// Normalized location label from address resolution
        location: String,
        /// The caller's original address string, echoed back verbatim
        address: String,
    },
    /// Failed lookup
    Error { error: String },
}

impl WeatherReport {
    /// Create an error report
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

/// Snapshot of current conditions at a coordinate pair
///
/// Assembled from the weather service response and rendered into the
/// forecast summary sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in degrees Celsius
    pub temperature: f32,
    /// Precipitation probability in percent (0-100)
    pub precipitation_chance: f32,
}

impl CurrentConditions {
    /// Qualitative hot/cold descriptor for the current temperature
    #[must_use]
    pub fn temperature_descriptor(&self) -> &'static str {
        match self.temperature {
            t if t <= 0.0 => "freezing",
            t if t < 10.0 => "cold",
            t if t < 18.0 => "cool",
            t if t < 27.0 => "warm",
            _ => "hot",
        }
    }

    /// Render the forecast summary sentence.
    ///
    /// Always contains the temperature, a hot/cold descriptor and a
    /// precipitation-probability phrase.
    #[must_use]
    pub fn summarize(&self) -> String {
        format!(
            "It is currently {:.1} degrees out, which feels {}. There is a {:.0}% chance of rain.",
            self.temperature,
            self.temperature_descriptor(),
            self.precipitation_chance
        )
    }
}
