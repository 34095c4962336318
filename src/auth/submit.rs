//! Login and registration submission.
//!
//! Local validation runs first and produces field-scoped errors without
//! touching the network. A claimed-once loading guard drops re-entrant
//! submits while a request is outstanding.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::auth::api::{LoginRequest, RegisterRequest, StoreApiError};
use crate::auth::identifier::{classify, is_valid_phone, IdentifierModes};
use crate::auth::session::Session;
use crate::traits::StoreApi;

/// Fallback shown when the login endpoint fails without a message.
pub const LOGIN_FALLBACK: &str = "Invalid credentials";
/// Fallback shown when the register endpoint fails without a message.
pub const REGISTER_FALLBACK: &str = "Registration failed";
/// Fallback shown when the send-otp endpoint fails without a message.
pub const SEND_OTP_FALLBACK: &str = "Failed to send OTP";
/// Fallback shown when the verify-otp endpoint fails without a message.
pub const VERIFY_OTP_FALLBACK: &str = "Invalid OTP";

/// Form fields a validation error can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identifier,
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    Otp,
}

/// Field-scoped validation failures, in form order.
pub type FieldErrors = Vec<(Field, String)>;

/// Error type for submit operations
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Another submit already owns the loading guard; this one was dropped.
    #[error("Submit already in flight")]
    InFlight,
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] StoreApiError),
}

impl SubmitError {
    /// Message suitable for display; see [`StoreApiError::user_message`].
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SubmitError::InFlight => fallback.to_string(),
            SubmitError::Api(e) => e.user_message(fallback),
        }
    }
}

/// Check login inputs locally and build the request payload.
///
/// The identifier must classify under the configured modes and the
/// password must be non-blank. The password is sent as typed.
pub fn validate_login(
    identifier: &str,
    password: &str,
    modes: IdentifierModes,
) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let identifier = match classify(identifier, modes) {
        Ok(id) => Some(id),
        Err(e) => {
            errors.push((Field::Identifier, e.user_message(modes).to_string()));
            None
        }
    };

    if password.trim().is_empty() {
        errors.push((Field::Password, "Password cannot be empty".to_string()));
    }

    match identifier {
        Some(identifier) if errors.is_empty() => Ok(LoginRequest {
            identifier,
            password: password.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Raw signup form values for [`validate_register`].
#[derive(Debug, Clone, Copy)]
pub struct RegisterInput<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    /// Whether the email passed OTP verification.
    pub otp_verified: bool,
}

/// Check signup inputs locally and build the request payload.
///
/// All checks run before any network call; an unverified email rejects
/// the submit here. The account name sent to the API is the first and
/// last name joined with a single space.
pub fn validate_register(
    input: RegisterInput<'_>,
    min_password: usize,
) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.first_name.trim().is_empty() {
        errors.push((Field::FirstName, "First name is required".to_string()));
    }
    if input.last_name.trim().is_empty() {
        errors.push((Field::LastName, "Last name is required".to_string()));
    }

    let email = match classify(input.email, IdentifierModes::EmailOnly) {
        Ok(id) => Some(id.canonical),
        Err(e) => {
            errors.push((
                Field::Email,
                e.user_message(IdentifierModes::EmailOnly).to_string(),
            ));
            None
        }
    };

    if !is_valid_phone(input.phone.trim()) {
        errors.push((Field::Phone, "Enter a 10-digit phone number".to_string()));
    }

    if input.password.is_empty() {
        errors.push((Field::Password, "Password cannot be empty".to_string()));
    } else if input.password.chars().count() < min_password {
        errors.push((
            Field::Password,
            format!("Password must be at least {} characters", min_password),
        ));
    }

    if !input.otp_verified {
        errors.push((Field::Otp, "Verify your email first".to_string()));
    }

    match email {
        Some(email) if errors.is_empty() => Ok(RegisterRequest {
            name: format!(
                "{} {}",
                input.first_name.trim(),
                input.last_name.trim()
            ),
            email,
            phone: input.phone.trim().to_string(),
            password: input.password.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Runs login/register calls with an at-most-one-in-flight guard.
///
/// Clones share the guard, so a clone handed to a spawned task keeps
/// the original's submits suppressed until the task finishes.
#[derive(Clone)]
pub struct CredentialSubmitter {
    api: Arc<dyn StoreApi>,
    in_flight: Arc<AtomicBool>,
}

impl CredentialSubmitter {
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        Self {
            api,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a submit owns the guard.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit a login request. Returns the established session.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, SubmitError> {
        let _guard = self.claim()?;
        let response = self.api.login(request).await?;
        Ok(response.into())
    }

    /// Submit a registration request. Returns the established session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, SubmitError> {
        let _guard = self.claim()?;
        let response = self.api.register(request).await?;
        Ok(response.into())
    }

    fn claim(&self) -> Result<SubmitGuard, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submit dropped: another submit is in flight");
            return Err(SubmitError::InFlight);
        }
        Ok(SubmitGuard {
            in_flight: Arc::clone(&self.in_flight),
        })
    }
}

/// Releases the loading guard when the submit resolves, error paths included.
struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}
