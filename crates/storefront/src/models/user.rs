//! User domain types.

use chrono::{DateTime, Utc};

use marigold_core::{Cart, UserId};

/// A storefront user (domain type).
///
/// The cart ledger is embedded in the user record and exclusively owned by
/// it; no other entity references it.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID, generated at signup.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique across users).
    pub email: String,
    /// Password, stored and compared as-is. No hashing is applied; this
    /// mirrors the documented credential-store contract.
    pub password: String,
    /// The 300-slot cart ledger.
    pub cart: Cart,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
