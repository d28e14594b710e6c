//! Admin catalog route handlers.
//!
//! These routes are unguarded; that gap is part of the documented surface
//! and is preserved as-is.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use marigold_core::ProductId;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::NewProduct;
use crate::state::AppState;

/// Response for a successful product creation.
#[derive(Debug, Serialize)]
pub struct AddProductResponse {
    pub success: bool,
    pub name: String,
}

/// Request body for product removal.
#[derive(Debug, Deserialize)]
pub struct RemoveProductRequest {
    pub id: ProductId,
}

/// Response for product removal.
#[derive(Debug, Serialize)]
pub struct RemoveProductResponse {
    pub success: bool,
}

/// Create a product with the next sequential id.
pub async fn add_product(
    State(state): State<AppState>,
    Json(fields): Json<NewProduct>,
) -> Result<Json<AddProductResponse>> {
    let product = ProductRepository::new(state.pool()).create(fields).await?;

    tracing::info!(id = %product.id, name = %product.name, "product added");

    Ok(Json(AddProductResponse {
        success: true,
        name: product.name,
    }))
}

/// Delete a product by id.
///
/// Succeeds whether or not the id matched anything.
pub async fn remove_product(
    State(state): State<AppState>,
    Json(req): Json<RemoveProductRequest>,
) -> Result<Json<RemoveProductResponse>> {
    let deleted = ProductRepository::new(state.pool())
        .delete_by_id(req.id)
        .await?;

    if deleted {
        tracing::info!(id = %req.id, "product removed");
    }

    Ok(Json(RemoveProductResponse { success: true }))
}
