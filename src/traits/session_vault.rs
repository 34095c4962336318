//! Session vault trait abstraction.
//!
//! Abstracts where the session record lives so the store can be driven
//! by the real file-backed vault in production and an in-memory one in
//! tests.

use async_trait::async_trait;

use crate::auth::session::Session;

/// Session persistence errors.
#[derive(Debug, Clone)]
pub enum SessionVaultError {
    /// Failed to load the session record
    LoadFailed(String),
    /// Failed to save the session record
    SaveFailed(String),
    /// Failed to clear the session record
    ClearFailed(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for SessionVaultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionVaultError::LoadFailed(msg) => write!(f, "Failed to load session: {}", msg),
            SessionVaultError::SaveFailed(msg) => write!(f, "Failed to save session: {}", msg),
            SessionVaultError::ClearFailed(msg) => write!(f, "Failed to clear session: {}", msg),
            SessionVaultError::Other(msg) => write!(f, "Session error: {}", msg),
        }
    }
}

impl std::error::Error for SessionVaultError {}

/// Trait for session storage and retrieval.
///
/// Loading never surfaces a corrupt record: implementations resolve
/// unreadable state to `None` so callers land in the signed-out state
/// instead of an error path.
#[async_trait]
pub trait SessionVault: Send + Sync {
    /// Load the persisted session, if any.
    async fn load(&self) -> Result<Option<Session>, SessionVaultError>;

    /// Persist the session record (token and user together).
    async fn save(&self, session: &Session) -> Result<(), SessionVaultError>;

    /// Remove the persisted session record.
    async fn clear(&self) -> Result<(), SessionVaultError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_vault_error_display() {
        assert_eq!(
            SessionVaultError::LoadFailed("read error".to_string()).to_string(),
            "Failed to load session: read error"
        );
        assert_eq!(
            SessionVaultError::SaveFailed("write error".to_string()).to_string(),
            "Failed to save session: write error"
        );
        assert_eq!(
            SessionVaultError::ClearFailed("delete error".to_string()).to_string(),
            "Failed to clear session: delete error"
        );
        assert_eq!(
            SessionVaultError::Other("unknown".to_string()).to_string(),
            "Session error: unknown"
        );
    }

    #[test]
    fn test_session_vault_error_implements_error_trait() {
        let err = SessionVaultError::Other("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
