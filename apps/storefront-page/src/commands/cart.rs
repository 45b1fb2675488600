//! # Cart Commands
//!
//! Commands behind the add-to-cart buttons and the cart sidebar controls.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                             │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add / increment /       │
//! │  │  Cart    │◄─────────────────│          │───┘ decrement / remove      │
//! │  └──────────┘  last item gone  └──────────┘                             │
//! │        ▲        or reset_cart       │                                   │
//! │        └────────────────────────────┘                                   │
//! │                                                                         │
//! │  After EVERY command: refresh_cart_view() rebuilds badge, list, total   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartView, CoreResult, LineItem, Money};
use tracing::debug;

use crate::error::ApiError;
use crate::feedback;
use crate::state::{CartState, CartTotals, ConfigState, PageState};

/// Data carried by an add-to-cart button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub id: String,
    pub name: String,
    /// Raw `data-price` attribute, e.g. `"9.99"`.
    pub price: String,
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Rebuilds the badge, item list and total from the current cart.
pub fn refresh_cart_view(cart: &CartState, page: &PageState, config: &ConfigState) {
    let view = cart.with_cart(|c| CartView::project(c, &config.view_options()));
    page.with_page_mut(|p| p.apply_cart_view(&view));
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a product and flashes its button.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: added with quantity 1
/// - Unparseable price, or a total too large to hold: error, cart and page
///   untouched
pub fn add_to_cart(
    cart: &CartState,
    page: &PageState,
    config: &ConfigState,
    request: AddToCart,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %request.id, price = %request.price, "add_to_cart command");

    let unit_price = Money::parse_decimal(&request.price)?;

    let response = cart.with_cart_mut(|c| -> CoreResult<CartResponse> {
        c.add_item(&request.id, &request.name, unit_price)?;
        Ok(CartResponse::from(&*c))
    })?;

    refresh_cart_view(cart, page, config);
    feedback::flash_added(page, config, &request.id);

    Ok(response)
}

/// "+" on a cart row.
///
/// Fails like [`add_to_cart`] when the total would be too large to hold.
pub fn increment_item(
    cart: &CartState,
    page: &PageState,
    config: &ConfigState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "increment_item command");

    let (changed, response) = cart.with_cart_mut(|c| -> CoreResult<_> {
        let changed = c.increment_item(product_id)?;
        Ok((changed, CartResponse::from(&*c)))
    })?;

    Ok(finish(cart, page, config, product_id, changed, response))
}

/// "-" on a cart row. The last unit removes the row.
pub fn decrement_item(
    cart: &CartState,
    page: &PageState,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    debug!(product_id, "decrement_item command");
    mutate(cart, page, config, product_id, Cart::decrement_item)
}

/// "×" on a cart row.
pub fn remove_item(
    cart: &CartState,
    page: &PageState,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    debug!(product_id, "remove_item command");
    mutate(cart, page, config, product_id, Cart::remove_item)
}

/// Empties the cart.
pub fn reset_cart(cart: &CartState, page: &PageState, config: &ConfigState) -> CartResponse {
    debug!("reset_cart command");

    let response = cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    });
    refresh_cart_view(cart, page, config);
    response
}

/// Opens or closes the cart sidebar. Returns the new state.
pub fn toggle_cart(page: &PageState) -> bool {
    let open = page.with_page_mut(|p| {
        p.cart_open = !p.cart_open;
        p.cart_open
    });
    debug!(open, "toggle_cart command");
    open
}

fn mutate(
    cart: &CartState,
    page: &PageState,
    config: &ConfigState,
    product_id: &str,
    op: fn(&mut Cart, &str) -> bool,
) -> CartResponse {
    let (changed, response) = cart.with_cart_mut(|c| {
        let changed = op(c, product_id);
        (changed, CartResponse::from(&*c))
    });

    finish(cart, page, config, product_id, changed, response)
}

fn finish(
    cart: &CartState,
    page: &PageState,
    config: &ConfigState,
    product_id: &str,
    changed: bool,
    response: CartResponse,
) -> CartResponse {
    if !changed {
        debug!(product_id, "Product not in cart, nothing to do");
    }

    refresh_cart_view(cart, page, config);
    response
}
