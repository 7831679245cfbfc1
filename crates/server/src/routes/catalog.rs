//! Catalog route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::Result;
use crate::services::CatalogService;
use crate::state::AppState;

/// List the full catalog.
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = CatalogService::new(state.pool()).list_products().await?;
    Ok(Json(products))
}

/// Show a single product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product = CatalogService::new(state.pool()).get_product(&id).await?;
    Ok(Json(product))
}

/// Wipe the catalog and re-insert the built-in entries.
#[instrument(skip(state))]
pub async fn reseed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summary = CatalogService::new(state.pool()).reseed().await?;
    tracing::info!(
        deleted = summary.deleted,
        inserted = summary.inserted,
        "Catalog re-seeded"
    );
    Ok(Json(summary))
}
