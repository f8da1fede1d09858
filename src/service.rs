//! Weather query orchestration
//!
//! Sequences address resolution and the forecast lookup, short-circuiting
//! on the first error. The two external calls are strictly sequential: the
//! forecast call is only issued once resolution has produced coordinates.

use std::sync::Arc;

use tracing::debug;

use crate::error::SkycastError;
use crate::forecast::ForecastProvider;
use crate::geocode::AddressResolver;
use crate::models::WeatherReport;

/// Error surfaced when the address parameter is missing or empty
pub const MISSING_ADDRESS_MESSAGE: &str = "You must provide an address!";

/// Orchestrates address resolution and the forecast lookup
pub struct WeatherService {
    resolver: Arc<dyn AddressResolver>,
    provider: Arc<dyn ForecastProvider>,
}

impl WeatherService {
    /// Create a new weather service over the given resolver and provider
    pub fn new(resolver: Arc<dyn AddressResolver>, provider: Arc<dyn ForecastProvider>) -> Self {
        Self { resolver, provider }
    }

    /// Look up current weather for a raw address query.
    ///
    /// Missing or empty input is rejected before any network call. A
    /// resolver failure skips the forecast step entirely. The success
    /// payload echoes the caller's raw address, not the normalized label.
    pub async fn lookup(&self, address: Option<&str>) -> WeatherReport {
        let Some(address) = address.map(str::trim).filter(|a| !a.is_empty()) else {
            debug!("Rejected weather query without an address");
            return WeatherReport::error(MISSING_ADDRESS_MESSAGE);
        };

        let coordinates = match self.resolver.resolve(address).await {
            Ok(coordinates) => coordinates,
            Err(error) => return self.report_error(error),
        };

        match self.provider.current_conditions(&coordinates).await {
            Ok(forecast) => WeatherReport::Conditions {
                forecast,
                location: coordinates.label,
                address: address.to_string(),
            },
            Err(error) => self.report_error(error),
        }
    }

    fn report_error(&self, error: SkycastError) -> WeatherReport {
        debug!("Weather lookup failed: {}", error);
        WeatherReport::error(error.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast;
    use crate::geocode;
    use crate::models::Coordinates;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubResolver {
        calls: AtomicUsize,
        outcome: Option<Coordinates>,
        error_message: &'static str,
    }

    impl StubResolver {
        fn ok(coordinates: Coordinates) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Some(coordinates),
                error_message: "",
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: None,
                error_message: message,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AddressResolver for StubResolver {
        async fn resolve(&self, _address: &str) -> Result<Coordinates, SkycastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Some(coordinates) => Ok(coordinates.clone()),
                None => Err(SkycastError::geocoding(self.error_message)),
            }
        }
    }

    struct StubProvider {
        calls: AtomicUsize,
        outcome: Option<&'static str>,
    }

    impl StubProvider {
        fn ok(summary: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Some(summary),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ForecastProvider for StubProvider {
        async fn current_conditions(
            &self,
            _coordinates: &Coordinates,
        ) -> Result<String, SkycastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Some(summary) => Ok(summary.to_string()),
                None => Err(SkycastError::forecast(forecast::CONNECT_ERROR_MESSAGE)),
            }
        }
    }

    fn london() -> Coordinates {
        Coordinates::new(51.5, -0.12, "London, England, United Kingdom")
    }

    #[tokio::test]
    async fn test_missing_address_short_circuits_without_calls() {
        let resolver = Arc::new(StubResolver::ok(london()));
        let provider = Arc::new(StubProvider::ok("Sunny."));
        let service = WeatherService::new(resolver.clone(), provider.clone());

        for address in [None, Some(""), Some("   ")] {
            let report = service.lookup(address).await;
            assert_eq!(report, WeatherReport::error(MISSING_ADDRESS_MESSAGE));
        }

        assert_eq!(resolver.calls(), 0);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolver_failure_skips_forecast() {
        let resolver = Arc::new(StubResolver::failing(geocode::NOT_FOUND_MESSAGE));
        let provider = Arc::new(StubProvider::ok("Sunny."));
        let service = WeatherService::new(resolver.clone(), provider.clone());

        let report = service.lookup(Some("asdkjhasdkjh123")).await;

        assert_eq!(report, WeatherReport::error(geocode::NOT_FOUND_MESSAGE));
        assert_eq!(resolver.calls(), 1);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_its_error() {
        let resolver = Arc::new(StubResolver::ok(london()));
        let provider = Arc::new(StubProvider::failing());
        let service = WeatherService::new(resolver, provider.clone());

        let report = service.lookup(Some("London")).await;

        assert_eq!(
            report,
            WeatherReport::error(forecast::CONNECT_ERROR_MESSAGE)
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_echoes_raw_address() {
        let resolver = Arc::new(StubResolver::ok(london()));
        let provider = Arc::new(StubProvider::ok(
            "It is currently 15 degrees out. There is a 20% chance of rain.",
        ));
        let service = WeatherService::new(resolver, provider);

        let report = service.lookup(Some("London")).await;

        assert_eq!(
            report,
            WeatherReport::Conditions {
                forecast: "It is currently 15 degrees out. There is a 20% chance of rain."
                    .to_string(),
                location: "London, England, United Kingdom".to_string(),
                address: "London".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_repeated_lookups_are_idempotent() {
        let resolver = Arc::new(StubResolver::ok(london()));
        let provider = Arc::new(StubProvider::ok("Sunny."));
        let service = WeatherService::new(resolver.clone(), provider);

        let first = service.lookup(Some("London")).await;
        let second = service.lookup(Some("London")).await;

        assert_eq!(first, second);
        // No caching: each lookup re-issues the resolver call
        assert_eq!(resolver.calls(), 2);
    }
}
