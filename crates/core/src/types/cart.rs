//! The cart ledger: a fixed-size mapping from product slot to quantity.
//!
//! Every user owns exactly one cart with [`CART_SLOTS`] slots, all present
//! and zeroed at creation. Slot values never go negative: removal clamps at
//! zero. The fixed-length array makes the slot-count invariant structural
//! rather than conventional.
//!
//! On the wire (and in storage) the cart serializes as a JSON object with
//! string keys, `{"0": 0, ..., "299": 0}`, which is the shape the web client
//! consumes.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of product slots in every cart.
pub const CART_SLOTS: usize = 300;

/// Errors from cart ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested slot index is outside `0..CART_SLOTS`.
    #[error("slot index {0} out of range (0..{CART_SLOTS})")]
    SlotOutOfRange(i64),
}

/// Per-user cart: quantity per product slot.
///
/// Slot indices conventionally equal product ids, but that is never
/// validated; callers may increment any in-range slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart(Box<[u32; CART_SLOTS]>);

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create a cart with all slots present and zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self(Box::new([0; CART_SLOTS]))
    }

    /// Validate a wire-level slot index (may be negative or too large).
    fn checked(slot: i64) -> Result<usize, CartError> {
        usize::try_from(slot)
            .ok()
            .filter(|&s| s < CART_SLOTS)
            .ok_or(CartError::SlotOutOfRange(slot))
    }

    /// Increment a slot's quantity by one and return the new quantity.
    ///
    /// No upper bound is enforced (saturates at `u32::MAX`).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SlotOutOfRange`] for an out-of-range slot.
    pub fn add_one(&mut self, slot: i64) -> Result<u32, CartError> {
        let idx = Self::checked(slot)?;
        let qty = &mut self.0[idx];
        *qty = qty.saturating_add(1);
        Ok(*qty)
    }

    /// Decrement a slot's quantity by one, clamping at zero.
    ///
    /// Removing from an already-empty slot is a silent no-op, not an error.
    /// Returns the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SlotOutOfRange`] for an out-of-range slot.
    pub fn remove_one(&mut self, slot: i64) -> Result<u32, CartError> {
        let idx = Self::checked(slot)?;
        let qty = &mut self.0[idx];
        *qty = qty.saturating_sub(1);
        Ok(*qty)
    }

    /// Quantity currently in a slot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SlotOutOfRange`] for an out-of-range slot.
    pub fn quantity(&self, slot: i64) -> Result<u32, CartError> {
        Ok(self.0[Self::checked(slot)?])
    }

    /// Iterate over `(slot, quantity)` pairs in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl Serialize for Cart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.slots().map(|(slot, qty)| (slot.to_string(), qty)))
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut cart = Self::new();
        for (key, qty) in entries {
            let slot: usize = key
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid cart slot key: {key:?}")))?;
            if slot >= CART_SLOTS {
                return Err(D::Error::custom(format!(
                    "cart slot {slot} out of range (0..{CART_SLOTS})"
                )));
            }
            cart.0[slot] = qty;
        }
        Ok(cart)
    }
}
