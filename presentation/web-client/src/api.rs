//! Catalog Service client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL of the Catalog Service. `CATALOG_API_URL` at build time
/// overrides the local default.
pub fn api_base() -> String {
    option_env!("CATALOG_API_URL")
        .unwrap_or("http://localhost:5001")
        .to_string()
}

/// One catalog listing as served by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(rename = "priceLabel")]
    pub price_label: String,
    pub size: String,
    #[serde(rename = "use")]
    pub usage: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog.request_failed")]
    Request,
    #[error("catalog.unexpected_status: {0}")]
    Status(u16),
    #[error("catalog.invalid_body")]
    Body,
}

/// Fetch the full product catalog. Issued exactly once on mount; the view
/// falls back to an empty catalog on any failure.
pub async fn fetch_products(base_url: &str) -> Result<Vec<ProductDto>, FetchError> {
    let url = format!("{base_url}/api/products");
    let response = reqwest::get(&url).await.map_err(|_| FetchError::Request)?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    response.json().await.map_err(|_| FetchError::Body)
}
