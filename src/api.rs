//! JSON API routes: weather lookup and product search

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::WeatherReport;
use crate::web::AppState;

/// Error surfaced when the search parameter is missing or empty
pub const MISSING_SEARCH_MESSAGE: &str = "You must provide a search term";

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductParams {
    search: Option<String>,
}

/// Product search response: an empty result list or an error.
///
/// Placeholder route; there is no product catalog behind it yet.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProductSearchResponse {
    Results { products: Vec<Product> },
    Error { error: String },
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/products", get(get_products))
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherParams>,
) -> Json<WeatherReport> {
    Json(state.service.lookup(params.address.as_deref()).await)
}

async fn get_products(Query(params): Query<ProductParams>) -> Json<ProductSearchResponse> {
    let Some(search) = params.search.filter(|term| !term.trim().is_empty()) else {
        return Json(ProductSearchResponse::Error {
            error: MISSING_SEARCH_MESSAGE.to_string(),
        });
    };

    info!("Product search for '{}'", search);
    Json(ProductSearchResponse::Results { products: vec![] })
}
