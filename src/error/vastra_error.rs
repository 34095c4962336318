//! Unified error type for the Vastra client.
//!
//! This module defines the main `VastraError` enum that unifies the
//! domain-specific error types, providing consistent categorization,
//! retry decisions, and user messaging.

use std::fmt;

use super::category::ErrorCategory;
use crate::auth::api::StoreApiError;
use crate::auth::identifier::{IdentifierModes, ValidationError};
use crate::auth::otp::{format_cooldown, OtpError};
use crate::traits::SessionVaultError;

/// Unified error type for the Vastra client.
///
/// `VastraError` consolidates the domain-specific error types into a
/// single enum, enabling:
/// - Uniform categorization and retry logic
/// - User-friendly error messages
/// - Stable error codes for logging
#[derive(Debug)]
pub enum VastraError {
    /// Identifier validation errors.
    Validation(ValidationError),

    /// One-time passcode flow errors.
    Otp(OtpError),

    /// Session persistence errors.
    Session(SessionVaultError),

    /// Storefront API errors.
    Api(StoreApiError),
}

impl VastraError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            VastraError::Validation(_) => ErrorCategory::User,
            VastraError::Otp(_) => ErrorCategory::User,
            VastraError::Session(_) => ErrorCategory::System,
            VastraError::Api(err) => match err {
                StoreApiError::Http(_) => ErrorCategory::Network,
                StoreApiError::Json(_) => ErrorCategory::Server,
                StoreApiError::ServerError { status, .. } => {
                    if *status == 401 {
                        ErrorCategory::Auth
                    } else if *status >= 500 {
                        ErrorCategory::Server
                    } else {
                        ErrorCategory::User
                    }
                }
            },
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            VastraError::Validation(err) => {
                err.user_message(IdentifierModes::default()).to_string()
            }
            VastraError::Otp(err) => match err {
                OtpError::CooldownActive { remaining } => {
                    format!("Wait {} before requesting another code", format_cooldown(*remaining))
                }
                OtpError::VerifyInFlight => "Verification is already running".to_string(),
                OtpError::AlreadyVerified => "This code was already verified".to_string(),
            },
            VastraError::Session(_) => "Couldn't access your saved session".to_string(),
            VastraError::Api(err) => match err {
                StoreApiError::Http(_) => {
                    "Network error. Check your connection and try again".to_string()
                }
                StoreApiError::Json(_) => {
                    "The server returned an unexpected response".to_string()
                }
                StoreApiError::ServerError {
                    message: Some(m), ..
                } if !m.is_empty() => m.clone(),
                StoreApiError::ServerError { status, .. } => {
                    if *status == 401 {
                        "Invalid credentials".to_string()
                    } else if *status >= 500 {
                        "The server is having trouble. Please try again later".to_string()
                    } else {
                        "Request failed".to_string()
                    }
                }
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            VastraError::Validation(ValidationError::Empty) => "validation_empty",
            VastraError::Validation(ValidationError::Unrecognized) => "validation_unrecognized",
            VastraError::Otp(OtpError::CooldownActive { .. }) => "otp_cooldown",
            VastraError::Otp(OtpError::VerifyInFlight) => "otp_verify_in_flight",
            VastraError::Otp(OtpError::AlreadyVerified) => "otp_already_verified",
            VastraError::Session(SessionVaultError::LoadFailed(_)) => "session_load",
            VastraError::Session(SessionVaultError::SaveFailed(_)) => "session_save",
            VastraError::Session(SessionVaultError::ClearFailed(_)) => "session_clear",
            VastraError::Session(SessionVaultError::Other(_)) => "session_other",
            VastraError::Api(StoreApiError::Http(_)) => "api_http",
            VastraError::Api(StoreApiError::Json(_)) => "api_json",
            VastraError::Api(StoreApiError::ServerError { .. }) => "api_server",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Check if this error means the session is no longer valid.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            VastraError::Api(StoreApiError::ServerError { status: 401, .. })
        )
    }
}

impl fmt::Display for VastraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VastraError::Validation(err) => write!(f, "{}", err),
            VastraError::Otp(err) => write!(f, "{}", err),
            VastraError::Session(err) => write!(f, "{}", err),
            VastraError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for VastraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VastraError::Validation(err) => Some(err),
            VastraError::Otp(err) => Some(err),
            VastraError::Session(err) => Some(err),
            VastraError::Api(err) => Some(err),
        }
    }
}

impl From<ValidationError> for VastraError {
    fn from(err: ValidationError) -> Self {
        VastraError::Validation(err)
    }
}

impl From<OtpError> for VastraError {
    fn from(err: OtpError) -> Self {
        VastraError::Otp(err)
    }
}

impl From<SessionVaultError> for VastraError {
    fn from(err: SessionVaultError) -> Self {
        VastraError::Session(err)
    }
}

impl From<StoreApiError> for VastraError {
    fn from(err: StoreApiError) -> Self {
        VastraError::Api(err)
    }
}

impl From<reqwest::Error> for VastraError {
    fn from(err: reqwest::Error) -> Self {
        VastraError::Api(StoreApiError::Http(err))
    }
}
