//! # Configuration State
//!
//! Page configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::validation::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD};
use storefront_core::ViewOptions;

/// Page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// How long an add button shows its "added" state
    pub feedback_delay_ms: u64,

    /// Label of an add button at rest
    pub idle_button_label: String,

    /// Label shown right after a click
    pub added_button_label: String,

    /// Background colour shown right after a click
    pub added_button_color: String,

    /// Placeholder shown instead of an empty cart list
    pub empty_cart_message: String,

    pub confirmation_title: String,
    pub confirmation_body: String,

    /// Form field name → id of the element that shows its error text.
    pub error_targets: BTreeMap<String, String>,
}

impl Default for ConfigState {
    fn default() -> Self {
        let error_targets = [NAME_FIELD, EMAIL_FIELD, MESSAGE_FIELD]
            .into_iter()
            .map(|field| (field.to_string(), format!("{field}-error")))
            .collect();

        ConfigState {
            currency_symbol: "$".to_string(),
            feedback_delay_ms: 1000,
            idle_button_label: "Add to Cart".to_string(),
            added_button_label: "Added!".to_string(),
            added_button_color: "#2ecc71".to_string(),
            empty_cart_message: "Your cart is empty".to_string(),
            confirmation_title: "Thank you!".to_string(),
            confirmation_body: "Your message has been sent successfully.".to_string(),
            error_targets,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_FEEDBACK_DELAY_MS`: Override button revert delay
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(symbol) = std::env::var("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(delay) = std::env::var("STOREFRONT_FEEDBACK_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => config.feedback_delay_ms = ms,
                Err(_) => tracing::warn!(%delay, "Ignoring invalid STOREFRONT_FEEDBACK_DELAY_MS"),
            }
        }

        config
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    /// Element id that displays errors for `field`.
    ///
    /// Fields without an explicit mapping use `<field>-error`.
    pub fn error_target(&self, field: &str) -> String {
        self.error_targets
            .get(field)
            .cloned()
            .unwrap_or_else(|| format!("{field}-error"))
    }

    /// Display settings for the cart projection.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            currency_symbol: self.currency_symbol.clone(),
            empty_cart_message: self.empty_cart_message.clone(),
            ..ViewOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = ConfigState::default();
        assert_eq!(config.feedback_delay(), Duration::from_millis(1000));
        assert_eq!(config.idle_button_label, "Add to Cart");
        assert_eq!(config.added_button_label, "Added!");
    }

    #[test]
    fn test_error_targets() {
        let mut config = ConfigState::default();
        assert_eq!(config.error_target("email"), "email-error");

        config
            .error_targets
            .insert("email".to_string(), "contact-email-hint".to_string());
        assert_eq!(config.error_target("email"), "contact-email-hint");
        assert_eq!(config.error_target("phone"), "phone-error");
    }

    #[test]
    fn test_view_options_carry_symbol() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        let options = config.view_options();
        assert_eq!(options.currency_symbol, "€");
        assert_eq!(options.total_label, "Total: ");
    }
}
