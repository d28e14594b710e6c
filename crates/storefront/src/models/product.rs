//! Product domain types.
//!
//! Field names on the wire (`new_price`, `old_price`, `date`) are part of
//! the contract the web client consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marigold_core::ProductId;

/// A catalog product.
///
/// Products are created by the admin add-product operation and deleted by
/// id; they are never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential integer id, assigned as `max(existing ids) + 1`.
    pub id: ProductId,
    pub name: String,
    /// Image URL.
    pub image: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
    pub available: bool,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
}

/// Fields submitted when creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
}
