//! # Cart Module
//!
//! The cart store: an ordered list of line items and the four mutations the
//! page performs on it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Page Action              Cart Method             State Change          │
//! │  ───────────              ───────────             ────────────          │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add_item() ──────────► push or qty += 1      │
//! │                                                                         │
//! │  "+" button ────────────► increment_item() ────► qty += 1              │
//! │                                                                         │
//! │  "-" button ────────────► decrement_item() ────► qty -= 1 or remove    │
//! │                                                                         │
//! │  "×" button ────────────► remove_item() ───────► items.remove(i)       │
//! │                                                                         │
//! │  Badge / total ─────────► item_count(), total() (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Ids
//! `increment_item`, `decrement_item` and `remove_item` on an id that is
//! not in the cart do nothing and return `false`.
//!
//! ## Limits
//! `add_item` and `increment_item` refuse a unit that would push the total
//! past `i64::MAX` cents, leaving the cart as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Invariants
/// - `quantity >= 1`; a line that would reach 0 is removed instead
/// - `name` and `unit_price` are frozen by the first add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id (unique within a cart)
    pub id: String,

    /// Display name
    pub name: String,

    /// Price of one unit
    pub unit_price: Money,

    /// Quantity in cart
    pub quantity: i64,
}

impl LineItem {
    fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart of one page session.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Insertion order is display order
/// - Every quantity is >= 1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended with quantity 1
    ///
    /// ## Errors
    /// [`CoreError::CartLimit`] when the new total would not fit in cents.
    /// The cart is unchanged in that case.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Cart, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item("A", "Widget", Money::from_cents(999)).unwrap();
    /// cart.add_item("A", "Widget", Money::from_cents(999)).unwrap();
    ///
    /// assert_eq!(cart.line_count(), 1);
    /// assert_eq!(cart.item_count(), 2);
    /// assert_eq!(cart.total().to_string(), "$19.98");
    /// ```
    pub fn add_item(&mut self, id: &str, name: &str, unit_price: Money) -> CoreResult<()> {
        let unit_price = self.get(id).map_or(unit_price, |item| item.unit_price);
        self.ensure_room(id, unit_price)?;

        match self.find_mut(id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(LineItem::new(id, name, unit_price)),
        }
        Ok(())
    }

    /// Adds one unit to an existing line. Returns `false` if `id` is unknown.
    ///
    /// ## Errors
    /// [`CoreError::CartLimit`], as for [`Cart::add_item`].
    pub fn increment_item(&mut self, id: &str) -> CoreResult<bool> {
        let Some(unit_price) = self.get(id).map(|item| item.unit_price) else {
            return Ok(false);
        };
        self.ensure_room(id, unit_price)?;

        if let Some(item) = self.find_mut(id) {
            item.quantity += 1;
        }
        Ok(true)
    }

    /// Removes one unit from a line, dropping the line when it was the last.
    ///
    /// Returns `false` if `id` is unknown.
    pub fn decrement_item(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Removes a line regardless of its quantity. Returns `false` if `id` is
    /// unknown.
    pub fn remove_item(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the line for `id`, if present.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all quantities. This is the badge value.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Σ unit_price × quantity.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// One more unit at `unit_price` must keep both the item count and the
    /// total inside `i64`. Line quantities and subtotals are bounded by
    /// those two, so nothing derived from the cart can overflow.
    fn ensure_room(&self, id: &str, unit_price: Money) -> CoreResult<()> {
        let fits = self.item_count().checked_add(1).is_some()
            && self.total().checked_add(unit_price).is_some();

        if fits {
            Ok(())
        } else {
            Err(CoreError::CartLimit { id: id.to_string() })
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
