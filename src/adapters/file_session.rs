//! File-based session vault adapter.
//!
//! This module provides a session vault implementation that uses the
//! existing [`SessionManager`] for file-based storage.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::auth::session::{Session, SessionManager};
use crate::traits::{SessionVault, SessionVaultError};

/// File-based session vault.
///
/// This adapter wraps the existing [`SessionManager`] and implements the
/// [`SessionVault`] trait, providing async file-based session storage.
///
/// The session record lives in `~/.vastra/.session.json` unless a custom
/// path is given.
#[derive(Debug)]
pub struct FileSessionVault {
    manager: SessionManager,
}

impl FileSessionVault {
    /// Create a new file-based vault at the default location.
    ///
    /// # Returns
    /// The vault, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SessionVaultError> {
        SessionManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| {
                SessionVaultError::Other("Failed to determine home directory".to_string())
            })
    }

    /// Create a vault storing the session at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            manager: SessionManager::with_path(path),
        }
    }

    /// Get a reference to the underlying session manager.
    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &PathBuf {
        self.manager.session_path()
    }
}

#[async_trait]
impl SessionVault for FileSessionVault {
    async fn load(&self) -> Result<Option<Session>, SessionVaultError> {
        // SessionManager::load() already discards corrupt records
        Ok(self.manager.load())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionVaultError> {
        if self.manager.save(session) {
            Ok(())
        } else {
            Err(SessionVaultError::SaveFailed(
                "Failed to write session file".to_string(),
            ))
        }
    }

    async fn clear(&self) -> Result<(), SessionVaultError> {
        if self.manager.clear() {
            Ok(())
        } else {
            Err(SessionVaultError::ClearFailed(
                "Failed to delete session file".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::User;
    use tempfile::TempDir;

    fn create_test_vault() -> (FileSessionVault, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".session.json");
        (FileSessionVault::with_path(path), temp_dir)
    }

    fn sample_session() -> Session {
        Session::new(
            "tok-file",
            User {
                id: Some("u-1".to_string()),
                name: "Meera Iyer".to_string(),
                email: "meera@example.com".to_string(),
                phone: None,
            },
        )
    }

    #[test]
    fn test_file_session_vault_new() {
        // This test depends on having a home directory
        let result = FileSessionVault::new();
        assert!(result.is_ok());
    }

    #[test]
    fn test_session_path() {
        let (vault, _temp) = create_test_vault();
        assert!(vault.session_path().ends_with(".session.json"));
    }

    #[tokio::test]
    async fn test_load_empty() {
        let (vault, _temp) = create_test_vault();
        assert!(vault.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_clear_round_trip() {
        let (vault, _temp) = create_test_vault();

        vault.save(&sample_session()).await.unwrap();
        let loaded = vault.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, "tok-file");
        assert_eq!(loaded.user.name, "Meera Iyer");

        vault.clear().await.unwrap();
        assert!(vault.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_record_loads_as_none() {
        let (vault, _temp) = create_test_vault();
        std::fs::write(vault.session_path(), "{ nope").unwrap();

        assert!(vault.load().await.unwrap().is_none());
        // The manager deletes the bad file on the way through
        assert!(!vault.session_path().exists());
    }
}
