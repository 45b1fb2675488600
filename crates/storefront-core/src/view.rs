//! # Cart View
//!
//! Pure projection of a [`Cart`] into what the page shows: the count badge,
//! one row per line item and the grand total.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Cart (3)                  ◄── badge       │
//! ├───────────────────────────────────────────┤
//! │  Widget   $9.99 × 2   [-] 2 [+] [×]       │ ◄── lines
//! │  Bolt     $0.50 × 1   [-] 1 [+] [×]       │
//! ├───────────────────────────────────────────┤
//! │  Total: $20.48             ◄── total_text  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! The whole view is rebuilt after every cart mutation. There is no diffing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, LineItem};

/// Display settings for the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub currency_symbol: String,
    pub total_label: String,
    pub empty_cart_message: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            currency_symbol: "$".to_string(),
            total_label: "Total: ".to_string(),
            empty_cart_message: "Your cart is empty".to_string(),
        }
    }
}

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub unit_price_text: String,
    pub quantity: i64,
    pub subtotal_text: String,
}

/// Everything the page needs to redraw the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Sum of quantities, as text.
    pub badge: String,

    /// Rows in display order. Empty when `empty_message` is set.
    pub lines: Vec<CartLineView>,

    /// `"Total: $x.xx"`.
    pub total_text: String,

    /// Placeholder shown instead of an empty list.
    pub empty_message: Option<String>,
}

impl CartView {
    /// Builds the view for the current cart contents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Cart, CartView, ViewOptions};
    ///
    /// let view = CartView::project(&Cart::new(), &ViewOptions::default());
    /// assert_eq!(view.total_text, "Total: $0.00");
    /// assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty"));
    /// ```
    pub fn project(cart: &Cart, options: &ViewOptions) -> Self {
        let total_text = format!(
            "{}{}",
            options.total_label,
            cart.total().format_with(&options.currency_symbol)
        );

        let empty_message = cart
            .is_empty()
            .then(|| options.empty_cart_message.clone());

        CartView {
            badge: cart.item_count().to_string(),
            lines: cart
                .items()
                .iter()
                .map(|item| line_view(item, options))
                .collect(),
            total_text,
            empty_message,
        }
    }

    /// Regenerates the cart item list markup.
    pub fn to_html(&self) -> String {
        if let Some(message) = &self.empty_message {
            return format!("<p class=\"empty-cart\">{}</p>", escape_html(message));
        }

        self.lines.iter().map(line_html).collect()
    }
}

fn line_view(item: &LineItem, options: &ViewOptions) -> CartLineView {
    CartLineView {
        id: item.id.clone(),
        name: item.name.clone(),
        unit_price_text: item.unit_price.format_with(&options.currency_symbol),
        quantity: item.quantity,
        subtotal_text: item.subtotal().format_with(&options.currency_symbol),
    }
}

fn line_html(line: &CartLineView) -> String {
    format!(
        concat!(
            "<div class=\"cart-item\" data-id=\"{id}\">",
            "<div class=\"item-info\"><h4>{name}</h4><p>{price} × {qty}</p></div>",
            "<div class=\"item-actions\">",
            "<button class=\"quantity-btn minus\">-</button>",
            "<span class=\"quantity\">{qty}</span>",
            "<button class=\"quantity-btn plus\">+</button>",
            "<button class=\"remove-btn\">×</button>",
            "</div></div>"
        ),
        id = escape_html(&line.id),
        name = escape_html(&line.name),
        price = escape_html(&line.unit_price_text),
        qty = line.quantity,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn options() -> ViewOptions {
        ViewOptions::default()
    }

    #[test]
    fn test_empty_cart_shows_placeholder_and_zero_total() {
        let view = CartView::project(&Cart::new(), &options());

        assert_eq!(view.badge, "0");
        assert!(view.lines.is_empty());
        assert_eq!(view.total_text, "Total: $0.00");
        assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty"));
        assert_eq!(
            view.to_html(),
            "<p class=\"empty-cart\">Your cart is empty</p>"
        );
    }

    #[test]
    fn test_populated_cart_projection() {
        let mut cart = Cart::new();
        cart.add_item("A", "Widget", Money::from_cents(999)).unwrap();
        cart.add_item("A", "Widget", Money::from_cents(999)).unwrap();
        cart.add_item("B", "Bolt", Money::from_cents(50)).unwrap();

        let view = CartView::project(&cart, &options());

        assert_eq!(view.badge, "3");
        assert_eq!(view.empty_message, None);
        assert_eq!(view.total_text, "Total: $20.48");
        assert_eq!(
            view.lines[0],
            CartLineView {
                id: "A".to_string(),
                name: "Widget".to_string(),
                unit_price_text: "$9.99".to_string(),
                quantity: 2,
                subtotal_text: "$19.98".to_string(),
            }
        );
        assert_eq!(view.lines[1].id, "B");
    }

    #[test]
    fn test_markup_has_one_row_per_line() {
        let mut cart = Cart::new();
        cart.add_item("A", "Widget", Money::from_cents(999)).unwrap();
        cart.add_item("B", "Bolt", Money::from_cents(50)).unwrap();

        let html = CartView::project(&cart, &options()).to_html();

        assert_eq!(html.matches("class=\"cart-item\"").count(), 2);
        assert!(html.contains("data-id=\"A\""));
        assert!(html.contains("<p>$9.99 × 1</p>"));
        assert!(html.contains("<span class=\"quantity\">1</span>"));
        assert!(!html.contains("empty-cart"));
    }

    #[test]
    fn test_markup_escapes_names() {
        let mut cart = Cart::new();
        cart.add_item("x\"y", "<b>Fish & Chips</b>", Money::from_cents(500)).unwrap();

        let html = CartView::project(&cart, &options()).to_html();

        assert!(html.contains("&lt;b&gt;Fish &amp; Chips&lt;/b&gt;"));
        assert!(html.contains("data-id=\"x&quot;y\""));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_custom_currency_symbol() {
        let mut cart = Cart::new();
        cart.add_item("A", "Widget", Money::from_cents(1250)).unwrap();

        let opts = ViewOptions {
            currency_symbol: "€".to_string(),
            ..ViewOptions::default()
        };
        let view = CartView::project(&cart, &opts);

        assert_eq!(view.total_text, "Total: €12.50");
        assert_eq!(view.lines[0].unit_price_text, "€12.50");
    }
}
