//! # storefront-core: Pure Logic for the Storefront Page
//!
//! This crate holds the cart store and the contact-form validator as plain
//! data and pure functions. It knows nothing about pages, events or timers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page (markup + buttons)                      │   │
//! │  │   Add to Cart ──► Cart sidebar ──► Contact form                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PageEvent                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-page (Session + commands)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │   view    │  │ validation│  │   │
//! │  │   │   Money   │  │   Cart    │  │ CartView  │  │ FormValid.│  │   │
//! │  │   │           │  │ LineItem  │  │  markup   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO TIMERS • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents
//! - [`cart`] - Cart store and line items
//! - [`view`] - Cart projection (badge, rows, total, markup)
//! - [`validation`] - Per-field form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, CartView, Money, ViewOptions};
//!
//! let mut cart = Cart::new();
//! let price = Money::parse_decimal("9.99").unwrap();
//! cart.add_item("A", "Widget", price).unwrap();
//! cart.add_item("A", "Widget", price).unwrap();
//!
//! let view = CartView::project(&cart, &ViewOptions::default());
//! assert_eq!(view.badge, "2");
//! assert_eq!(view.total_text, "Total: $19.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use validation::{FormInput, FormValidator, ValidationReport, ValidationRule};
pub use view::{CartLineView, CartView, ViewOptions};
