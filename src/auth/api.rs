//! HTTP client for the Vastra Villa storefront API.
//!
//! This module provides the client for the account endpoints: requesting
//! and verifying one-time passcodes, registering, and logging in.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::identifier::{Identifier, IdentifierKind};
use crate::auth::session::{Session, User};
use crate::traits::StoreApi;

/// Default URL for the storefront API
pub const STORE_API_URL: &str = "https://api.vastravilla.com";

/// Error type for storefront API operations
#[derive(Debug)]
pub enum StoreApiError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    ServerError {
        status: u16,
        /// Message extracted from the error body, when the server sent one
        message: Option<String>,
    },
}

impl StoreApiError {
    /// Message suitable for display: the server-provided one when present
    /// and non-empty, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            StoreApiError::ServerError {
                message: Some(m), ..
            } if !m.is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for StoreApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreApiError::Http(e) => write!(f, "HTTP error: {}", e),
            StoreApiError::Json(e) => write!(f, "JSON error: {}", e),
            StoreApiError::ServerError {
                status,
                message: Some(m),
            } => {
                write!(f, "Server error ({}): {}", status, m)
            }
            StoreApiError::ServerError {
                status,
                message: None,
            } => {
                write!(f, "Server error ({})", status)
            }
        }
    }
}

impl std::error::Error for StoreApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreApiError::Http(e) => Some(e),
            StoreApiError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreApiError {
    fn from(e: reqwest::Error) -> Self {
        StoreApiError::Http(e)
    }
}

impl From<serde_json::Error> for StoreApiError {
    fn from(e: serde_json::Error) -> Self {
        StoreApiError::Json(e)
    }
}

/// Error body shape used by the storefront API: {"message": "..."}
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Response from the auth endpoints (POST /auth/register and POST /auth/login).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session {
            token: response.token,
            user: response.user,
        }
    }
}

/// Validated payload for POST /auth/register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Validated payload for POST /auth/login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: Identifier,
    pub password: String,
}

/// Wire field name for an identifier: "email" or "phone".
fn identifier_key(identifier: &Identifier) -> &'static str {
    match identifier.kind {
        IdentifierKind::Email => "email",
        IdentifierKind::Phone => "phone",
    }
}

/// Build a [`StoreApiError`] from a non-success response, pulling the
/// server's message out of the body when one is there.
async fn error_from_response(response: reqwest::Response) -> StoreApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message);
    StoreApiError::ServerError { status, message }
}

/// Client for the Vastra Villa storefront API.
pub struct StoreApiClient {
    /// Base URL for the storefront API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl StoreApiClient {
    /// Create a new StoreApiClient with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: STORE_API_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a new StoreApiClient with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }
}

impl Default for StoreApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreApi for StoreApiClient {
    /// Request a one-time passcode for the given destination.
    ///
    /// POST /auth/send-otp
    async fn send_otp(&self, identifier: &Identifier) -> Result<(), StoreApiError> {
        let url = format!("{}/auth/send-otp", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ identifier_key(identifier): identifier.canonical }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }

    /// Check a passcode against the one issued for the destination.
    ///
    /// POST /auth/verify-otp
    async fn verify_otp(&self, identifier: &Identifier, code: &str) -> Result<(), StoreApiError> {
        let url = format!("{}/auth/verify-otp", self.base_url);

        let body = serde_json::json!({
            identifier_key(identifier): identifier.canonical,
            "otp": code,
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }

    /// Create an account.
    ///
    /// POST /auth/register
    ///
    /// Returns the token and user record for the new account.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, StoreApiError> {
        let url = format!("{}/auth/register", self.base_url);

        let body = serde_json::json!({
            "name": request.name,
            "email": request.email,
            "phone": request.phone,
            "password": request.password,
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let data: AuthResponse = response.json().await?;
        Ok(data)
    }

    /// Sign in with an email or phone plus password.
    ///
    /// POST /auth/login
    ///
    /// Returns the token and user record for the account.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, StoreApiError> {
        let url = format!("{}/auth/login", self.base_url);

        let body = serde_json::json!({
            identifier_key(&request.identifier): request.identifier.canonical,
            "password": request.password,
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let data: AuthResponse = response.json().await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identifier::{classify, IdentifierModes};

    fn email_identifier() -> Identifier {
        classify("meera@example.com", IdentifierModes::EmailOrPhone).unwrap()
    }

    fn phone_identifier() -> Identifier {
        classify("9876543210", IdentifierModes::EmailOrPhone).unwrap()
    }

    #[test]
    fn test_store_api_client_new() {
        let client = StoreApiClient::new();
        assert_eq!(client.base_url, STORE_API_URL);
    }

    #[test]
    fn test_store_api_client_with_base_url() {
        let custom_url = "http://localhost:8080".to_string();
        let client = StoreApiClient::with_base_url(custom_url.clone());
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_store_api_client_default() {
        let client = StoreApiClient::default();
        assert_eq!(client.base_url, STORE_API_URL);
    }

    #[test]
    fn test_identifier_key_for_email() {
        assert_eq!(identifier_key(&email_identifier()), "email");
    }

    #[test]
    fn test_identifier_key_for_phone() {
        assert_eq!(identifier_key(&phone_identifier()), "phone");
    }

    #[test]
    fn test_store_api_error_display_with_message() {
        let err = StoreApiError::ServerError {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        let display = format!("{}", err);
        assert!(display.contains("401"));
        assert!(display.contains("Invalid credentials"));
    }

    #[test]
    fn test_store_api_error_display_without_message() {
        let err = StoreApiError::ServerError {
            status: 500,
            message: None,
        };
        let display = format!("{}", err);
        assert!(display.contains("500"));
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = StoreApiError::ServerError {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn test_user_message_falls_back_without_server_message() {
        let err = StoreApiError::ServerError {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }

    #[test]
    fn test_user_message_falls_back_on_empty_server_message() {
        let err = StoreApiError::ServerError {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message("Invalid OTP"), "Invalid OTP");
    }

    #[test]
    fn test_user_message_falls_back_on_json_error() {
        let err = StoreApiError::Json(serde_json::from_str::<AuthResponse>("not json").unwrap_err());
        assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");
    }

    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "OTP expired"}"#).unwrap();
        assert_eq!(body.message, Some("OTP expired".to_string()));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(body.message.is_none());
    }

    #[test]
    fn test_auth_response_deserialize() {
        let json = r#"{
            "token": "tok-123",
            "user": {
                "id": "u-1",
                "name": "Meera Iyer",
                "email": "meera@example.com",
                "phone": "9876543210"
            }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "tok-123");
        assert_eq!(response.user.name, "Meera Iyer");
        assert_eq!(response.user.phone, Some("9876543210".to_string()));
    }

    #[test]
    fn test_auth_response_deserialize_minimal_user() {
        let json = r#"{
            "token": "tok-456",
            "user": {
                "name": "Dev Patel",
                "email": "dev@example.com"
            }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "tok-456");
        assert!(response.user.id.is_none());
        assert!(response.user.phone.is_none());
    }

    #[test]
    fn test_auth_response_into_session() {
        let response = AuthResponse {
            token: "tok-789".to_string(),
            user: User {
                id: None,
                name: "Meera Iyer".to_string(),
                email: "meera@example.com".to_string(),
                phone: None,
            },
        };

        let session: Session = response.into();
        assert_eq!(session.token, "tok-789");
        assert_eq!(session.user.email, "meera@example.com");
    }

    // Async tests for HTTP methods (with invalid server to test error handling)
    #[tokio::test]
    async fn test_send_otp_with_invalid_server() {
        let client = StoreApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.send_otp(&email_identifier()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_verify_otp_with_invalid_server() {
        let client = StoreApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.verify_otp(&email_identifier(), "1234").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_register_with_invalid_server() {
        let client = StoreApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let request = RegisterRequest {
            name: "Meera Iyer".to_string(),
            email: "meera@example.com".to_string(),
            phone: "9876543210".to_string(),
            password: "secret-password".to_string(),
        };
        let result = client.register(&request).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_login_with_invalid_server() {
        let client = StoreApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let request = LoginRequest {
            identifier: phone_identifier(),
            password: "secret-password".to_string(),
        };
        let result = client.login(&request).await;
        assert!(result.is_err());
    }
}
