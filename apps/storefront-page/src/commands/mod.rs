//! # Commands Module
//!
//! Everything a page event can do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Add, +, -, ×, reset, toggle sidebar
//! └── contact.rs  ◄─── Submit contact form, dismiss confirmation
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the page
//! fn toggle_cart(page: &PageState) -> bool
//!
//! // Needs cart, page and config
//! fn add_to_cart(cart: &CartState, page: &PageState, config: &ConfigState, ...)
//! ```

pub mod cart;
pub mod contact;
