//! # State Module
//!
//! Session state for the storefront page.
//!
//! ## Why Multiple State Types?
//! Instead of one global object holding everything, each concern gets its
//! own type and commands declare exactly which ones they touch:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session                                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │  PageState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  labels, delay   │              │
//! │  │    Cart      │  │  PageSurface │  │  error targets   │              │
//! │  │  >>          │  │  >>          │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • CartState: the only cart; mutated by cart commands                  │
//! │  • PageState: written by commands and by the button revert task        │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod page;

pub use cart::{CartState, CartTotals};
pub use config::ConfigState;
pub use page::{ButtonAppearance, Confirmation, PageState, PageSurface};
