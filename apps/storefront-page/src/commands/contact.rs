//! # Contact Form Commands
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_contact_form(form)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store values ──► FormValidator::validate                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each field: show error at its target, or clear it                  │
//! │       │                                                                 │
//! │       ├── all passed ──► show confirmation overlay                      │
//! │       │                        │                                        │
//! │       │                        ▼                                        │
//! │       │                 dismiss_confirmation() ──► reset form           │
//! │       │                                                                 │
//! │       └── any failed ──► nothing submitted, errors stay visible         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::validation::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD};
use storefront_core::{FormInput, FormValidator, ValidationReport};
use tracing::{debug, info};
use uuid::Uuid;

use crate::state::{Confirmation, ConfigState, PageState};

/// The three contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactForm> for FormInput {
    fn from(form: ContactForm) -> Self {
        FormInput::new()
            .with(NAME_FIELD, form.name)
            .with(EMAIL_FIELD, form.email)
            .with(MESSAGE_FIELD, form.message)
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// True when every field passed and the confirmation is showing.
    pub accepted: bool,
    pub report: ValidationReport,
}

/// Validates the form and reflects the outcome on the page.
pub fn submit_contact_form(
    page: &PageState,
    config: &ConfigState,
    validator: &FormValidator,
    form: ContactForm,
) -> SubmitResponse {
    let input = FormInput::from(form);
    let report = validator.validate(&input);
    let accepted = report.is_valid();

    page.with_page_mut(|p| {
        p.form = input;

        for outcome in &report.outcomes {
            let target = config.error_target(&outcome.field);
            match &outcome.error {
                Some(message) => p.show_field_error(&outcome.field, target, message),
                None => p.clear_field_error(&outcome.field, target),
            }
        }

        if accepted {
            p.confirmation = Some(Confirmation {
                id: Uuid::new_v4(),
                title: config.confirmation_title.clone(),
                body: config.confirmation_body.clone(),
            });
        }
    });

    if accepted {
        info!("Contact form accepted");
    } else {
        debug!(failed = report.errors().count(), "Contact form rejected");
    }

    SubmitResponse { accepted, report }
}

/// Closes the confirmation overlay and resets the form.
///
/// Returns `false` (and changes nothing) when no overlay is showing.
pub fn dismiss_confirmation(page: &PageState) -> bool {
    let dismissed = page.with_page_mut(|p| match p.confirmation.take() {
        Some(_) => {
            p.reset_form();
            true
        }
        None => false,
    });
    debug!(dismissed, "dismiss_confirmation command");
    dismissed
}
