//! Cart route handlers.
//!
//! All three routes are gated behind [`RequireAuth`]. Mutations follow the
//! documented read-modify-write contract: load the user, update the ledger
//! in memory, persist the whole cart field.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use marigold_core::Cart;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::User;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Request body for cart mutations.
///
/// `itemId` is the slot index; conventionally a product id, but never
/// validated against the catalog.
#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    #[serde(rename = "itemId")]
    pub item_id: i64,
}

/// Load the authenticated user's record.
///
/// A verified token whose user no longer resolves is treated the same as an
/// invalid token.
async fn load_user(state: &AppState, auth: RequireAuth) -> Result<User> {
    UserRepository::new(state.pool())
        .get_by_id(auth.0)
        .await?
        .ok_or(AppError::Auth(AuthError::InvalidToken))
}

/// Increment a cart slot by one.
#[instrument(skip(state, auth))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(req): Json<CartItemRequest>,
) -> Result<&'static str> {
    let mut user = load_user(&state, auth).await?;
    user.cart.add_one(req.item_id)?;
    UserRepository::new(state.pool())
        .save_cart(user.id, &user.cart)
        .await?;

    Ok("Added to cart")
}

/// Decrement a cart slot by one, clamping at zero.
///
/// Removing from an empty slot succeeds without changing anything.
#[instrument(skip(state, auth))]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(req): Json<CartItemRequest>,
) -> Result<&'static str> {
    let mut user = load_user(&state, auth).await?;
    user.cart.remove_one(req.item_id)?;
    UserRepository::new(state.pool())
        .save_cart(user.id, &user.cart)
        .await?;

    Ok("Removed from cart")
}

/// Return the full 300-entry cart map.
pub async fn get_cart(State(state): State<AppState>, auth: RequireAuth) -> Result<Json<Cart>> {
    let user = load_user(&state, auth).await?;
    Ok(Json(user.cart))
}
