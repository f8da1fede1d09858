//! Router assembly and server startup

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::SkycastConfig;
use crate::forecast::ForecastClient;
use crate::geocode::GeocodeClient;
use crate::pages;
use crate::service::WeatherService;

/// Shared per-process state handed to every handler
pub struct AppState {
    pub config: SkycastConfig,
    pub service: WeatherService,
}

/// Build the full application router: pages, JSON API, static assets and
/// the 404 fallback.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(pages::home))
        .route("/help", get(pages::help))
        .route("/help/{*rest}", get(pages::help_not_found))
        .route("/about", get(pages::about))
        .merge(api::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server and serve until shutdown
pub async fn run(config: SkycastConfig) -> anyhow::Result<()> {
    let resolver = GeocodeClient::new(&config.geocoding)?;
    let provider = ForecastClient::new(&config.forecast)?;
    let service = WeatherService::new(Arc::new(resolver), Arc::new(provider));

    let port = config.server.port;
    let state = Arc::new(AppState { config, service });
    let app = router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is up on http://localhost:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
