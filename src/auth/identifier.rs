//! Identifier classification for the account flows.
//!
//! A customer identifies themselves with either an email address or a
//! 10-digit phone number. Classification is pure string inspection; the
//! result carries the trimmed canonical form that gets sent to the API.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Anchored email shape check: something before the `@`, something after,
/// and a dot in the domain. No whitespace anywhere.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

/// Which identifier kinds the storefront accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierModes {
    /// Email addresses only.
    EmailOnly,
    /// Email addresses or 10-digit phone numbers.
    #[default]
    EmailOrPhone,
}

/// The kind of a classified identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Phone,
}

/// A validated identifier with its trimmed canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub kind: IdentifierKind,
    pub canonical: String,
}

impl Identifier {
    pub fn is_email(&self) -> bool {
        self.kind == IdentifierKind::Email
    }

    pub fn is_phone(&self) -> bool {
        self.kind == IdentifierKind::Phone
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

/// Classification failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Identifier is empty")]
    Empty,
    #[error("Not a valid email or phone number")]
    Unrecognized,
}

impl ValidationError {
    /// Message suitable for a field error line.
    pub fn user_message(&self, modes: IdentifierModes) -> &'static str {
        match self {
            ValidationError::Empty => "This field is required",
            ValidationError::Unrecognized => match modes {
                IdentifierModes::EmailOnly => "Enter a valid email address",
                IdentifierModes::EmailOrPhone => "Enter a valid email or 10-digit phone number",
            },
        }
    }
}

/// Classify a raw user-typed identifier.
///
/// Surrounding whitespace is trimmed before classification and the trimmed
/// value becomes the canonical form. Phone numbers are only accepted when
/// `modes` allows them.
pub fn classify(raw: &str, modes: IdentifierModes) -> Result<Identifier, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if is_valid_email(trimmed) {
        return Ok(Identifier {
            kind: IdentifierKind::Email,
            canonical: trimmed.to_string(),
        });
    }

    if modes == IdentifierModes::EmailOrPhone && is_valid_phone(trimmed) {
        return Ok(Identifier {
            kind: IdentifierKind::Phone,
            canonical: trimmed.to_string(),
        });
    }

    Err(ValidationError::Unrecognized)
}

/// Check whether a string is a well-formed email address.
///
/// Expects the input to already be trimmed.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}

/// Check whether a string is exactly 10 ASCII digits.
///
/// Separators, spaces, and a leading `+` all disqualify the input.
pub fn is_valid_phone(raw: &str) -> bool {
    raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit())
}
