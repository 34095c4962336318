//! Mock storefront API for testing.
//!
//! Provides a [`StoreApi`] implementation with configurable failures and
//! a call log, so flow tests can assert exactly which endpoints were hit
//! without network access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::api::{AuthResponse, LoginRequest, RegisterRequest, StoreApiError};
use crate::auth::identifier::{Identifier, IdentifierKind};
use crate::auth::session::User;
use crate::traits::StoreApi;

/// A recorded call to the mock API, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    SendOtp { identifier: Identifier },
    VerifyOtp { identifier: Identifier, code: String },
    Register { request: RegisterRequest },
    Login { request: LoginRequest },
}

type QueuedFailure = Option<(u16, Option<String>)>;

/// Mock storefront API with configurable responses.
///
/// All endpoints succeed by default; `fail_next_*` arms a one-shot
/// server error for the matching endpoint. Clones share state, so a
/// clone handed to the code under test can be inspected afterwards.
///
/// # Example
///
/// ```ignore
/// use vastra::adapters::mock::{ApiCall, MockStoreApi};
///
/// let api = MockStoreApi::new();
/// api.fail_next_login(401, Some("Invalid credentials"));
///
/// // ... run the code under test ...
///
/// assert!(matches!(api.calls()[0], ApiCall::Login { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct MockStoreApi {
    /// Recorded calls in arrival order
    calls: Arc<Mutex<Vec<ApiCall>>>,
    /// One-shot failure for the next send-otp call
    send_otp_failure: Arc<Mutex<QueuedFailure>>,
    /// One-shot failure for the next verify-otp call
    verify_otp_failure: Arc<Mutex<QueuedFailure>>,
    /// One-shot failure for the next register call
    register_failure: Arc<Mutex<QueuedFailure>>,
    /// One-shot failure for the next login call
    login_failure: Arc<Mutex<QueuedFailure>>,
    /// User returned in auth responses, when set
    user: Arc<Mutex<Option<User>>>,
    /// While true, calls record themselves and then park until released
    hold_responses: Arc<Mutex<bool>>,
}

impl MockStoreApi {
    /// Create a new mock API where every endpoint succeeds.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            send_otp_failure: Arc::new(Mutex::new(None)),
            verify_otp_failure: Arc::new(Mutex::new(None)),
            register_failure: Arc::new(Mutex::new(None)),
            login_failure: Arc::new(Mutex::new(None)),
            user: Arc::new(Mutex::new(None)),
            hold_responses: Arc::new(Mutex::new(false)),
        }
    }

    /// Get the recorded calls (for testing).
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear the recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Fail the next send-otp call with the given status and message.
    pub fn fail_next_send_otp(&self, status: u16, message: Option<&str>) {
        *self.send_otp_failure.lock().unwrap() = Some((status, message.map(String::from)));
    }

    /// Fail the next verify-otp call with the given status and message.
    pub fn fail_next_verify_otp(&self, status: u16, message: Option<&str>) {
        *self.verify_otp_failure.lock().unwrap() = Some((status, message.map(String::from)));
    }

    /// Fail the next register call with the given status and message.
    pub fn fail_next_register(&self, status: u16, message: Option<&str>) {
        *self.register_failure.lock().unwrap() = Some((status, message.map(String::from)));
    }

    /// Fail the next login call with the given status and message.
    pub fn fail_next_login(&self, status: u16, message: Option<&str>) {
        *self.login_failure.lock().unwrap() = Some((status, message.map(String::from)));
    }

    /// Set the user returned in auth responses.
    pub fn set_user(&self, user: Option<User>) {
        *self.user.lock().unwrap() = user;
    }

    /// While true, endpoints record their call and then wait cooperatively
    /// until released. Lets tests observe the in-flight window.
    pub fn set_hold_responses(&self, hold: bool) {
        *self.hold_responses.lock().unwrap() = hold;
    }

    async fn park_while_held(&self) {
        loop {
            if !*self.hold_responses.lock().unwrap() {
                break;
            }
            tokio::task::yield_now().await;
        }
    }

    fn take_failure(slot: &Arc<Mutex<QueuedFailure>>) -> Result<(), StoreApiError> {
        if let Some((status, message)) = slot.lock().unwrap().take() {
            return Err(StoreApiError::ServerError { status, message });
        }
        Ok(())
    }

    fn response_user(&self, name: &str, email: &str, phone: Option<String>) -> User {
        self.user.lock().unwrap().clone().unwrap_or_else(|| User {
            id: Some("mock-user-1".to_string()),
            name: name.to_string(),
            email: email.to_string(),
            phone,
        })
    }
}

impl Default for MockStoreApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreApi for MockStoreApi {
    async fn send_otp(&self, identifier: &Identifier) -> Result<(), StoreApiError> {
        self.calls.lock().unwrap().push(ApiCall::SendOtp {
            identifier: identifier.clone(),
        });
        self.park_while_held().await;
        Self::take_failure(&self.send_otp_failure)
    }

    async fn verify_otp(&self, identifier: &Identifier, code: &str) -> Result<(), StoreApiError> {
        self.calls.lock().unwrap().push(ApiCall::VerifyOtp {
            identifier: identifier.clone(),
            code: code.to_string(),
        });
        self.park_while_held().await;
        Self::take_failure(&self.verify_otp_failure)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, StoreApiError> {
        self.calls.lock().unwrap().push(ApiCall::Register {
            request: request.clone(),
        });
        self.park_while_held().await;
        Self::take_failure(&self.register_failure)?;

        Ok(AuthResponse {
            token: "mock-token".to_string(),
            user: self.response_user(
                &request.name,
                &request.email,
                Some(request.phone.clone()),
            ),
        })
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, StoreApiError> {
        self.calls.lock().unwrap().push(ApiCall::Login {
            request: request.clone(),
        });
        self.park_while_held().await;
        Self::take_failure(&self.login_failure)?;

        let user = match request.identifier.kind {
            IdentifierKind::Email => {
                self.response_user("Mock User", &request.identifier.canonical, None)
            }
            IdentifierKind::Phone => self.response_user(
                "Mock User",
                "mock@example.com",
                Some(request.identifier.canonical.clone()),
            ),
        };

        Ok(AuthResponse {
            token: "mock-token".to_string(),
            user,
        })
    }
}
