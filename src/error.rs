//! Error types and handling for the `Skycast` application

use thiserror::Error;

/// Main error type for the `Skycast` application
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Address resolution errors (transport failure or no matching location)
    #[error("Geocoding error: {message}")]
    Geocoding { message: String },

    /// Forecast lookup errors (transport failure or malformed payload)
    #[error("Forecast error: {message}")]
    Forecast { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SkycastError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocoding<S: Into<String>>(message: S) -> Self {
        Self::Geocoding {
            message: message.into(),
        }
    }

    /// Create a new forecast error
    pub fn forecast<S: Into<String>>(message: S) -> Self {
        Self::Forecast {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the message surfaced to callers in the `{"error": ...}` payload.
    ///
    /// Validation, geocoding and forecast messages are already written for
    /// end users and pass through verbatim. Configuration problems never
    /// belong in a response body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Validation { message }
            | SkycastError::Geocoding { message }
            | SkycastError::Forecast { message } => message.clone(),
            SkycastError::Config { .. } => {
                "Service is misconfigured. Please try again later.".to_string()
            }
        }
    }
}
