//! # Validation Module
//!
//! Per-field form validation for the contact form.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Submit contact form                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FormValidator::validate(&input) ← THIS MODULE                          │
//! │       │                                                                 │
//! │       ├── name:    trimmed length < 2?   → "Name must be at least ..."  │
//! │       ├── email:   not x@y.z?            → "Please enter a valid ..."   │
//! │       └── message: trimmed length < 10?  → "Message must be at least .."│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationReport                                                       │
//! │   ├── one outcome per field (error or cleared)                          │
//! │   └── is_valid() gates the confirmation                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules never look at other fields or at earlier attempts.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{FormInput, FormValidator};
//!
//! let input = FormInput::new()
//!     .with("name", "Jo")
//!     .with("email", "a@b.com")
//!     .with("message", "1234567890");
//!
//! let report = FormValidator::contact_form().validate(&input);
//! assert!(report.is_valid());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Contact form field names.
pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const MESSAGE_FIELD: &str = "message";

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

// Permissive syntactic check, not RFC 5322.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Returns true for `local@domain.tld` shaped input without whitespace.
///
/// The value is NOT trimmed first: `" a@b.com"` fails.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("bad"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn page_length(value: &str) -> usize {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .encode_utf16()
        .count()
}

// =============================================================================
// Rules
// =============================================================================

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single predicate + message pair applied to one field.
pub struct ValidationRule {
    field: String,
    predicate: Predicate,
    message: String,
}

impl ValidationRule {
    /// A rule that passes when `predicate` returns true.
    pub fn new<F>(field: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        ValidationRule {
            field: field.into(),
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Passes when the trimmed value is at least `min` long.
    ///
    /// Length is measured the way the browser measures it: surrounding
    /// whitespace and byte-order marks are trimmed, then UTF-16 code units
    /// are counted. A single emoji therefore has length 2.
    pub fn min_trimmed_len(field: impl Into<String>, min: usize, message: impl Into<String>) -> Self {
        Self::new(field, move |v| page_length(v) >= min, message)
    }

    /// Passes when the value looks like an email address.
    pub fn email(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, is_valid_email, message)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if `value` satisfies the rule.
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Input & Report
// =============================================================================

/// Raw text values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Value of `field`; missing fields read as empty.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormInput(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Result for one field. `error == None` means any shown error is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutcome {
    pub field: String,
    pub error: Option<String>,
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    /// True only if every field passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.error.is_none())
    }

    /// Error message for `field`, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.outcomes
            .iter()
            .find(|o| o.field == field)
            .and_then(|o| o.error.as_deref())
    }

    /// `(field, message)` for every failing field.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error.as_deref().map(|e| (o.field.as_str(), e)))
    }
}

// =============================================================================
// Validator
// =============================================================================

/// An ordered set of rules.
///
/// Fields are reported in the order their first rule was registered. When a
/// field has several rules, only the first failing one is reported.
#[derive(Debug, Default)]
pub struct FormValidator {
    rules: Vec<ValidationRule>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The contact form: name, email, message.
    pub fn contact_form() -> Self {
        Self::new()
            .with_rule(ValidationRule::min_trimmed_len(
                NAME_FIELD,
                NAME_MIN_LEN,
                NAME_TOO_SHORT,
            ))
            .with_rule(ValidationRule::email(EMAIL_FIELD, EMAIL_INVALID))
            .with_rule(ValidationRule::min_trimmed_len(
                MESSAGE_FIELD,
                MESSAGE_MIN_LEN,
                MESSAGE_TOO_SHORT,
            ))
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Distinct field names in registration order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field()) {
                fields.push(rule.field());
            }
        }
        fields
    }

    /// Evaluates every field and reports the first violation of each.
    pub fn validate(&self, input: &FormInput) -> ValidationReport {
        let outcomes = self
            .fields()
            .into_iter()
            .map(|field| {
                let value = input.get(field);
                let error = self
                    .rules
                    .iter()
                    .filter(|rule| rule.field() == field)
                    .find(|rule| !rule.check(value))
                    .map(|rule| rule.message().to_string());

                FieldOutcome {
                    field: field.to_string(),
                    error,
                }
            })
            .collect();

        ValidationReport { outcomes }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> FormInput {
        FormInput::new()
            .with(NAME_FIELD, name)
            .with(EMAIL_FIELD, email)
            .with(MESSAGE_FIELD, message)
    }

    #[test]
    fn test_valid_contact_form() {
        let report = FormValidator::contact_form().validate(&contact("Jo", "a@b.com", "1234567890"));

        assert!(report.is_valid());
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn test_all_fields_fail() {
        let report = FormValidator::contact_form().validate(&contact("J", "bad", "short"));

        assert!(!report.is_valid());
        assert_eq!(report.error_for(NAME_FIELD), Some(NAME_TOO_SHORT));
        assert_eq!(report.error_for(EMAIL_FIELD), Some(EMAIL_INVALID));
        assert_eq!(report.error_for(MESSAGE_FIELD), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn test_outcomes_follow_registration_order() {
        let report = FormValidator::contact_form().validate(&FormInput::new());
        let fields: Vec<&str> = report.outcomes.iter().map(|o| o.field.as_str()).collect();
        assert_eq!(fields, [NAME_FIELD, EMAIL_FIELD, MESSAGE_FIELD]);
    }

    #[test]
    fn test_one_bad_field_fails_the_form() {
        let report = FormValidator::contact_form().validate(&contact("Jo", "a@b", "1234567890"));

        assert!(!report.is_valid());
        assert_eq!(report.error_for(NAME_FIELD), None);
        assert_eq!(report.error_for(EMAIL_FIELD), Some(EMAIL_INVALID));
        assert_eq!(report.error_for(MESSAGE_FIELD), None);
    }

    #[test]
    fn test_lengths_are_measured_after_trimming() {
        let validator = FormValidator::contact_form();

        let report = validator.validate(&contact("  J  ", "a@b.com", "   123456789   "));
        assert_eq!(report.error_for(NAME_FIELD), Some(NAME_TOO_SHORT));
        assert_eq!(report.error_for(MESSAGE_FIELD), Some(MESSAGE_TOO_SHORT));

        let report = validator.validate(&contact(" Jo ", "a@b.com", " 1234567890 "));
        assert!(report.is_valid());
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        let validator = FormValidator::contact_form();

        let report = validator.validate(&contact("é", "a@b.com", "1234567890"));
        assert_eq!(report.error_for(NAME_FIELD), Some(NAME_TOO_SHORT));

        let report = validator.validate(&contact("😀", "a@b.com", "1234567890"));
        assert_eq!(report.error_for(NAME_FIELD), None);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let validator = FormValidator::contact_form();

        let report = validator.validate(&contact("\u{FEFF}J", "a@b.com", "1234567890"));
        assert_eq!(report.error_for(NAME_FIELD), Some(NAME_TOO_SHORT));

        let report = validator.validate(&contact("J", "a@b.com", "\u{FEFF}123456789\u{FEFF}"));
        assert_eq!(report.error_for(MESSAGE_FIELD), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("x@y.z"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn test_missing_field_reads_as_empty() {
        let input = FormInput::new().with(NAME_FIELD, "Jo");
        assert_eq!(input.get(EMAIL_FIELD), "");

        let report = FormValidator::contact_form().validate(&input);
        assert_eq!(report.error_for(EMAIL_FIELD), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let validator = FormValidator::new()
            .with_rule(ValidationRule::min_trimmed_len("code", 1, "Code is required"))
            .with_rule(ValidationRule::new(
                "code",
                |v| v.chars().all(|c| c.is_ascii_digit()),
                "Code must be numeric",
            ));

        let empty = validator.validate(&FormInput::new());
        assert_eq!(empty.error_for("code"), Some("Code is required"));
        assert_eq!(empty.outcomes.len(), 1);

        let letters = validator.validate(&FormInput::new().with("code", "ab"));
        assert_eq!(letters.error_for("code"), Some("Code must be numeric"));

        assert!(validator.validate(&FormInput::new().with("code", "42")).is_valid());
    }

    #[test]
    fn test_empty_validator_accepts_anything() {
        let report = FormValidator::new().validate(&FormInput::new());
        assert!(report.is_valid());
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_form_input_from_iter() {
        let input: FormInput = [("name", "Jo"), ("email", "a@b.com")].into_iter().collect();
        assert_eq!(input.get("name"), "Jo");
        assert_eq!(input.get("email"), "a@b.com");
    }
}
