//! # Cart State
//!
//! Holds the session's cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` like the page surface, so clones of
//! a `CartState` share one cart. Only `PageState` is handed to spawned tasks
//! (the button revert); the cart is touched only by commands. Each command
//! runs to completion while holding the lock, so every event sees and leaves
//! a consistent cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Page Event               Command                 Cart State Change     │
//! │  ──────────               ───────                 ─────────────────     │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► push or qty += 1     │
//! │                                                                         │
//! │  "+" / "-" ──────────────► increment/decrement ─► qty ± 1 (or remove)  │
//! │                                                                         │
//! │  "×" ────────────────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  Reset ──────────────────► reset_cart() ────────► items.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::Cart;

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities (badge value)
    pub item_count: i64,
    /// Distinct products
    pub line_count: usize,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            total_cents: cart.total().cents(),
        }
    }
}

/// Session-owned cart state.
///
/// A poisoned lock is recovered: cart mutations either complete or return an
/// error before touching anything, so the data is still usable.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
