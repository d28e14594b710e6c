//! Public catalog route handlers.
//!
//! The derived views ("new collections", "popular") are presentation-layer
//! slices of the full scan, not independent queries.

use axum::{Json, extract::State};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// How many trailing products make up the "new collections" view.
const NEW_COLLECTIONS_LEN: usize = 8;

/// How many leading products make up the "popular" view.
const POPULAR_LEN: usize = 4;

/// Full catalog in storage order.
pub async fn all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// The last 8 products in storage order.
pub async fn new_collections(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let mut products = ProductRepository::new(state.pool()).list_all().await?;
    let start = products.len().saturating_sub(NEW_COLLECTIONS_LEN);
    Ok(Json(products.split_off(start)))
}

/// The first 4 products in storage order.
pub async fn popular_in_women(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let mut products = ProductRepository::new(state.pool()).list_all().await?;
    products.truncate(POPULAR_LEN);
    Ok(Json(products))
}
