use axum::Json;
use vantage_core::{SubtypeInfo, catalog};

/// Read-only error-code catalog
pub async fn error_catalog_handler() -> Json<&'static [SubtypeInfo]> {
    Json(catalog())
}
