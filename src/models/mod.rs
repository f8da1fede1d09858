//! Data models for the Skycast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: geographic coordinates produced by address resolution
//! - Weather: current conditions and the weather lookup payload

pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Coordinates;
pub use weather::{CurrentConditions, WeatherReport};
