//! `Skycast` - server-rendered weather lookup web application
//!
//! This library provides the core functionality for the Skycast site:
//! geocoding free-text addresses, fetching current weather conditions,
//! and the HTTP routes that tie the two together.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod models;
pub mod pages;
pub mod service;
pub mod web;

// Re-export core types for public API
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use forecast::{ForecastClient, ForecastProvider};
pub use geocode::{AddressResolver, GeocodeClient};
pub use models::{Coordinates, WeatherReport};
pub use service::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
