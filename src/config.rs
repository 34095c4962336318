//! Runtime configuration for the Vastra client.
//!
//! This module defines the tunable knobs of the auth flow and their
//! environment overrides.

use std::path::PathBuf;

use crate::auth::api::STORE_API_URL;
use crate::auth::identifier::IdentifierModes;

/// Configuration for the account flows.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use vastra::config::FlowConfig;
///
/// let config = FlowConfig::default()
///     .with_otp_length(6)
///     .with_api_url("http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Which identifier kinds login accepts (default: email or phone)
    pub identifier_modes: IdentifierModes,
    /// Number of digits in a one-time passcode (default: 4)
    pub otp_length: usize,
    /// Minimum password length accepted at registration (default: 1)
    pub min_password_length: usize,
    /// Base URL of the storefront API
    pub api_url: String,
    /// Override for the session file location (default: `~/.vastra/.session.json`)
    pub session_path: Option<PathBuf>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            identifier_modes: IdentifierModes::EmailOrPhone,
            otp_length: 4,
            min_password_length: 1,
            api_url: STORE_API_URL.to_string(),
            session_path: None,
        }
    }
}

impl FlowConfig {
    /// Create a new FlowConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which identifier kinds login accepts.
    pub fn with_identifier_modes(mut self, modes: IdentifierModes) -> Self {
        self.identifier_modes = modes;
        self
    }

    /// Set the passcode length.
    pub fn with_otp_length(mut self, length: usize) -> Self {
        self.otp_length = length;
        self
    }

    /// Set the minimum password length accepted at registration.
    pub fn with_min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    /// Set the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set an explicit session file path.
    pub fn with_session_path(mut self, path: PathBuf) -> Self {
        self.session_path = Some(path);
        self
    }

    /// Create config from environment variables.
    ///
    /// `VASTRA_API_URL` overrides the API base URL and
    /// `VASTRA_SESSION_PATH` overrides the session file location.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VASTRA_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        if let Ok(path) = std::env::var("VASTRA_SESSION_PATH") {
            if !path.is_empty() {
                config.session_path = Some(PathBuf::from(path));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_flow_config_default() {
        let config = FlowConfig::default();
        assert_eq!(config.identifier_modes, IdentifierModes::EmailOrPhone);
        assert_eq!(config.otp_length, 4);
        assert_eq!(config.min_password_length, 1);
        assert_eq!(config.api_url, STORE_API_URL);
        assert!(config.session_path.is_none());
    }

    #[test]
    fn test_flow_config_builder() {
        let config = FlowConfig::new()
            .with_identifier_modes(IdentifierModes::EmailOnly)
            .with_otp_length(6)
            .with_min_password_length(8)
            .with_api_url("http://localhost:9000")
            .with_session_path(PathBuf::from("/tmp/session.json"));

        assert_eq!(config.identifier_modes, IdentifierModes::EmailOnly);
        assert_eq!(config.otp_length, 6);
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.session_path, Some(PathBuf::from("/tmp/session.json")));
    }

    #[test]
    #[serial]
    fn test_from_env_without_overrides() {
        std::env::remove_var("VASTRA_API_URL");
        std::env::remove_var("VASTRA_SESSION_PATH");

        let config = FlowConfig::from_env();
        assert_eq!(config.api_url, STORE_API_URL);
        assert!(config.session_path.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_with_overrides() {
        std::env::set_var("VASTRA_API_URL", "http://localhost:8080");
        std::env::set_var("VASTRA_SESSION_PATH", "/tmp/vastra-test.json");

        let config = FlowConfig::from_env();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(
            config.session_path,
            Some(PathBuf::from("/tmp/vastra-test.json"))
        );

        std::env::remove_var("VASTRA_API_URL");
        std::env::remove_var("VASTRA_SESSION_PATH");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_values() {
        std::env::set_var("VASTRA_API_URL", "");

        let config = FlowConfig::from_env();
        assert_eq!(config.api_url, STORE_API_URL);

        std::env::remove_var("VASTRA_API_URL");
    }
}
