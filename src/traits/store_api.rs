//! Storefront API trait abstraction.
//!
//! The account flows talk to the storefront's auth endpoints through
//! this trait so the submit/verify orchestration can be tested against
//! a recording mock instead of a live server.

use async_trait::async_trait;

use crate::auth::api::{AuthResponse, LoginRequest, RegisterRequest, StoreApiError};
use crate::auth::identifier::Identifier;

/// The four auth endpoints of the storefront API.
///
/// `send_otp` and `verify_otp` carry the identifier the code was sent
/// to; `register` and `login` return the token and user that seed a
/// session.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Request an OTP for the identifier. `POST /auth/send-otp`
    async fn send_otp(&self, identifier: &Identifier) -> Result<(), StoreApiError>;

    /// Verify a previously sent OTP. `POST /auth/verify-otp`
    async fn verify_otp(&self, identifier: &Identifier, code: &str) -> Result<(), StoreApiError>;

    /// Create an account. `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, StoreApiError>;

    /// Sign in with credentials. `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, StoreApiError>;
}
