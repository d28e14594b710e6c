//! Shared type definitions.
//!
//! All types here are plain data: they serialize with serde and carry no
//! behavior beyond their own invariants.

pub mod cart;
pub mod id;

pub use cart::{CART_SLOTS, Cart, CartError};
pub use id::{ProductId, UserId};
