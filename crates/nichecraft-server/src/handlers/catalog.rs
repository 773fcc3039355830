//! Catalog and health handlers

use axum::Json;
use serde::Serialize;

use nichecraft_core::{ProductType, ProductTypeInfo};

/// Response for the health probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/product-types - Product types in display order
pub async fn list_product_types() -> Json<Vec<ProductTypeInfo>> {
    Json(ProductType::all().iter().map(|t| t.info()).collect())
}
