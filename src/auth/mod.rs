//! Account authentication for the Vastra Villa storefront client.
//!
//! This module provides the full sign-in surface:
//! - Identifier classification (email vs 10-digit phone)
//! - One-time passcode request/verify flow with resend cooldown
//! - Session persistence and hydration
//! - Auth gating for protected views
//! - Login/register submission over the storefront API

pub mod api;
pub mod gate;
pub mod identifier;
pub mod otp;
pub mod password;
pub mod session;
pub mod store;
pub mod submit;

pub use api::{AuthResponse, LoginRequest, RegisterRequest, StoreApiClient, StoreApiError};
pub use gate::{AuthGate, GateDecision};
pub use identifier::{
    classify, is_valid_email, is_valid_phone, Identifier, IdentifierKind, IdentifierModes,
    ValidationError,
};
pub use otp::{format_cooldown, OtpChallenge, OtpError, OtpFlowState, RESEND_COOLDOWN_SECS};
pub use password::Strength;
pub use session::{Session, SessionManager, User};
pub use store::{HydrationStatus, SessionStore};
pub use submit::{
    validate_login, validate_register, CredentialSubmitter, Field, FieldErrors, RegisterInput,
    SubmitError, LOGIN_FALLBACK, REGISTER_FALLBACK, SEND_OTP_FALLBACK, VERIFY_OTP_FALLBACK,
};
