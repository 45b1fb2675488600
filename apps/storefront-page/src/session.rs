//! # Session
//!
//! One page session: the explicitly owned bundle of cart, page surface,
//! configuration and validator. Two sessions never share state.
//!
//! ## Event Routing
//! ```text
//! PageEvent ──► Session::dispatch ──┬──► commands::cart::*
//!                                   └──► commands::contact::*
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::FormValidator;
use tracing::info;
use uuid::Uuid;

use crate::commands::cart::{self, AddToCart, CartResponse};
use crate::commands::contact::{self, ContactForm, SubmitResponse};
use crate::error::ApiError;
use crate::state::{CartState, ConfigState, PageState, PageSurface};

/// Every input the page can produce.
///
/// ## Wire Format
/// ```json
/// {"type": "add_to_cart", "id": "A", "name": "Widget", "price": "9.99"}
/// {"type": "decrement_item", "id": "A"}
/// {"type": "submit_contact_form", "name": "Jo", "email": "a@b.com", "message": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    AddToCart(AddToCart),
    IncrementItem { id: String },
    DecrementItem { id: String },
    RemoveItem { id: String },
    ResetCart,
    GetCart,
    ToggleCart,
    SubmitContactForm(ContactForm),
    DismissConfirmation,
}

/// What a dispatched event answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CommandResponse {
    Cart(CartResponse),
    CartVisibility { open: bool },
    ContactForm(SubmitResponse),
    Confirmation { dismissed: bool },
}

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    cart: CartState,
    page: PageState,
    config: ConfigState,
    validator: FormValidator,
}

impl Session {
    /// Creates a session with an empty cart already rendered.
    pub fn new(config: ConfigState) -> Self {
        let session = Session {
            id: Uuid::new_v4(),
            cart: CartState::new(),
            page: PageState::new(),
            config,
            validator: FormValidator::contact_form(),
        };

        cart::refresh_cart_view(&session.cart, &session.page, &session.config);
        info!(session_id = %session.id, "Session started");
        session
    }

    /// Routes one event to its command.
    pub fn dispatch(&self, event: PageEvent) -> Result<CommandResponse, ApiError> {
        let (state, page, config) = (&self.cart, &self.page, &self.config);

        let response = match event {
            PageEvent::AddToCart(request) => {
                CommandResponse::Cart(cart::add_to_cart(state, page, config, request)?)
            }
            PageEvent::IncrementItem { id } => {
                CommandResponse::Cart(cart::increment_item(state, page, config, &id)?)
            }
            PageEvent::DecrementItem { id } => {
                CommandResponse::Cart(cart::decrement_item(state, page, config, &id))
            }
            PageEvent::RemoveItem { id } => {
                CommandResponse::Cart(cart::remove_item(state, page, config, &id))
            }
            PageEvent::ResetCart => CommandResponse::Cart(cart::reset_cart(state, page, config)),
            PageEvent::GetCart => CommandResponse::Cart(cart::get_cart(state)),
            PageEvent::ToggleCart => CommandResponse::CartVisibility {
                open: cart::toggle_cart(page),
            },
            PageEvent::SubmitContactForm(form) => CommandResponse::ContactForm(
                contact::submit_contact_form(page, config, &self.validator, form),
            ),
            PageEvent::DismissConfirmation => CommandResponse::Confirmation {
                dismissed: contact::dismiss_confirmation(page),
            },
        };

        Ok(response)
    }

    /// Decodes one JSON event and dispatches it.
    pub fn dispatch_json(&self, line: &str) -> Result<CommandResponse, ApiError> {
        let event: PageEvent = serde_json::from_str(line)?;
        self.dispatch(event)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Current page surface.
    pub fn snapshot(&self) -> PageSurface {
        self.page.snapshot()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConfigState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn add(session: &Session, id: &str, price: &str) -> CommandResponse {
        session
            .dispatch(PageEvent::AddToCart(AddToCart {
                id: id.to_string(),
                name: "Widget".to_string(),
                price: price.to_string(),
            }))
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_twice_scenario() {
        let session = Session::default();
        add(&session, "A", "9.99");
        let response = add(&session, "A", "9.99");

        let CommandResponse::Cart(cart) = response else {
            panic!("expected cart response");
        };
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, "A");
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.totals.total_cents, 1998);
        assert_eq!(session.snapshot().cart_total, "Total: $19.98");
    }

    #[tokio::test]
    async fn test_add_then_decrement_scenario() {
        let session = Session::default();
        add(&session, "A", "10.00");
        session
            .dispatch(PageEvent::DecrementItem { id: "A".to_string() })
            .unwrap();

        assert_eq!(session.cart().with_cart(|c| c.item_count()), 0);
        assert_eq!(session.snapshot().cart_count, "0");
    }

    #[tokio::test]
    async fn test_oversized_price_twice_keeps_session_alive() {
        let session = Session::default();
        let line = r#"{"type":"add_to_cart","id":"A","name":"W","price":"50000000000000000"}"#;

        assert!(session.dispatch_json(line).is_ok());
        let err = session.dispatch_json(line).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let response = session.dispatch(PageEvent::GetCart).unwrap();
        let CommandResponse::Cart(cart) = response else {
            panic!("expected cart response");
        };
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.totals.total_cents, 5_000_000_000_000_000_000);
        assert_eq!(session.snapshot().cart_count, "1");
    }

    #[test]
    fn test_contact_round_trip() {
        let session = Session::default();
        let response = session
            .dispatch(PageEvent::SubmitContactForm(ContactForm {
                name: "Jo".to_string(),
                email: "a@b.com".to_string(),
                message: "1234567890".to_string(),
            }))
            .unwrap();
        assert!(matches!(
            response,
            CommandResponse::ContactForm(SubmitResponse { accepted: true, .. })
        ));

        let response = session.dispatch(PageEvent::DismissConfirmation).unwrap();
        assert_eq!(response, CommandResponse::Confirmation { dismissed: true });
        assert_eq!(session.snapshot().form.get("name"), "");
    }

    #[test]
    fn test_events_decode_from_json() {
        let event: PageEvent = serde_json::from_str(
            r#"{"type":"add_to_cart","id":"A","name":"Widget","price":"9.99"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            PageEvent::AddToCart(AddToCart {
                id: "A".to_string(),
                name: "Widget".to_string(),
                price: "9.99".to_string(),
            })
        );

        let event: PageEvent = serde_json::from_str(r#"{"type":"toggle_cart"}"#).unwrap();
        assert_eq!(event, PageEvent::ToggleCart);
    }

    #[test]
    fn test_dispatch_json_toggle() {
        let session = Session::default();
        let response = session.dispatch_json(r#"{"type":"toggle_cart"}"#).unwrap();
        assert_eq!(response, CommandResponse::CartVisibility { open: true });
        assert!(session.snapshot().cart_open);
    }

    #[test]
    fn test_dispatch_json_rejects_unknown_event() {
        let session = Session::default();
        let err = session.dispatch_json(r#"{"type":"checkout"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEvent);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let a = Session::default();
        let b = Session::default();
        a.dispatch(PageEvent::ToggleCart).unwrap();

        assert_ne!(a.id(), b.id());
        assert!(a.snapshot().cart_open);
        assert!(!b.snapshot().cart_open);
    }

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_value(CommandResponse::CartVisibility { open: true }).unwrap();
        assert_eq!(json["kind"], "cart_visibility");
        assert_eq!(json["data"]["open"], true);
    }
}
