//! # Page State
//!
//! The visible surface of the page: everything a command is allowed to
//! change.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ header          [Cart (3)]  ◄── cart_count                    │
//! ├──────────────────────────────────────────────────────────────┤
//! │ products        [Added!] [Add to Cart]  ◄── buttons           │
//! ├──────────────────────────────────────────────────────────────┤
//! │ sidebar (cart_open)                                           │
//! │   cart_items_html                                             │
//! │   cart_total                                                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │ contact form    form values, error_text, invalid_inputs       │
//! ├──────────────────────────────────────────────────────────────┤
//! │ overlay         confirmation                                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shared behind `Arc<Mutex<_>>` because the delayed button revert writes to
//! it from a spawned task.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::{CartView, FormInput};
use uuid::Uuid;

/// Current look of an add-to-cart button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonAppearance {
    pub label: String,
    /// `None` restores the stylesheet colour.
    pub background: Option<String>,
}

/// The success overlay shown after a valid submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

/// Snapshot of everything visible on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSurface {
    /// Badge text in the header.
    pub cart_count: String,

    /// Markup of the cart item list.
    pub cart_items_html: String,

    /// `"Total: $x.xx"`.
    pub cart_total: String,

    /// Whether the cart sidebar is open.
    pub cart_open: bool,

    /// Product id → button look. Buttons never clicked are absent.
    pub buttons: BTreeMap<String, ButtonAppearance>,

    pub confirmation: Option<Confirmation>,

    /// Error target id → text. Cleared targets hold an empty string.
    pub error_text: BTreeMap<String, String>,

    /// Fields whose input carries the `error` class.
    pub invalid_inputs: BTreeSet<String>,

    /// Current values of the contact form inputs.
    pub form: FormInput,
}

impl PageSurface {
    /// Replaces the badge, list markup and total with a fresh projection.
    pub fn apply_cart_view(&mut self, view: &CartView) {
        self.cart_count = view.badge.clone();
        self.cart_items_html = view.to_html();
        self.cart_total = view.total_text.clone();
    }

    pub fn set_button(&mut self, product_id: &str, appearance: ButtonAppearance) {
        self.buttons.insert(product_id.to_string(), appearance);
    }

    pub fn show_field_error(&mut self, field: &str, target: String, message: &str) {
        self.error_text.insert(target, message.to_string());
        self.invalid_inputs.insert(field.to_string());
    }

    pub fn clear_field_error(&mut self, field: &str, target: String) {
        self.error_text.insert(target, String::new());
        self.invalid_inputs.remove(field);
    }

    /// Empties every form input and any error shown for it.
    pub fn reset_form(&mut self) {
        self.form = FormInput::default();
        for text in self.error_text.values_mut() {
            text.clear();
        }
        self.invalid_inputs.clear();
    }
}

/// Session-owned page surface.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    surface: Arc<Mutex<PageSurface>>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the surface.
    pub fn with_page<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PageSurface) -> R,
    {
        let surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        f(&surface)
    }

    /// Executes a function with write access to the surface.
    pub fn with_page_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PageSurface) -> R,
    {
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut surface)
    }

    /// Clone of the current surface.
    pub fn snapshot(&self) -> PageSurface {
        self.with_page(PageSurface::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Cart, Money, ViewOptions};

    #[test]
    fn test_apply_cart_view() {
        let mut cart = Cart::new();
        cart.add_item("A", "Widget", Money::from_cents(999)).unwrap();
        let view = CartView::project(&cart, &ViewOptions::default());

        let mut surface = PageSurface::default();
        surface.apply_cart_view(&view);

        assert_eq!(surface.cart_count, "1");
        assert_eq!(surface.cart_total, "Total: $9.99");
        assert!(surface.cart_items_html.contains("data-id=\"A\""));
    }

    #[test]
    fn test_field_error_show_and_clear() {
        let mut surface = PageSurface::default();

        surface.show_field_error("name", "name-error".to_string(), "Too short");
        assert_eq!(surface.error_text["name-error"], "Too short");
        assert!(surface.invalid_inputs.contains("name"));

        surface.clear_field_error("name", "name-error".to_string());
        assert_eq!(surface.error_text["name-error"], "");
        assert!(surface.invalid_inputs.is_empty());
    }

    #[test]
    fn test_reset_form_clears_values_and_errors() {
        let mut surface = PageSurface {
            form: FormInput::new().with("name", "Jo"),
            ..PageSurface::default()
        };
        surface.show_field_error("email", "email-error".to_string(), "Bad");

        surface.reset_form();

        assert_eq!(surface.form.get("name"), "");
        assert_eq!(surface.error_text["email-error"], "");
        assert!(surface.invalid_inputs.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let page = PageState::new();
        let before = page.snapshot();
        page.with_page_mut(|p| p.cart_open = true);

        assert!(!before.cart_open);
        assert!(page.snapshot().cart_open);
    }
}
