//! In-memory session vault for testing.
//!
//! Provides a session vault that keeps the record in memory, suitable
//! for testing hydration and sign-in flows without file system access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::session::Session;
use crate::traits::{SessionVault, SessionVaultError};

/// In-memory session vault for testing.
///
/// Stores the session record in memory so tests can verify persistence
/// behavior without touching the file system. Clones share state.
///
/// # Example
///
/// ```ignore
/// use vastra::adapters::mock::InMemorySessionVault;
/// use vastra::traits::SessionVault;
///
/// let vault = InMemorySessionVault::new();
///
/// // Initially empty
/// assert!(vault.load().await?.is_none());
///
/// // Save a session
/// vault.save(&session).await?;
/// assert!(vault.load().await?.is_some());
///
/// // Clear it
/// vault.clear().await?;
/// assert!(vault.load().await?.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct InMemorySessionVault {
    /// Stored session record
    session: Arc<Mutex<Option<Session>>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether clear should fail
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySessionVault {
    /// Create a new empty in-memory vault.
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            load_should_fail: Arc::new(Mutex::new(false)),
            save_should_fail: Arc::new(Mutex::new(false)),
            clear_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a vault holding an initial session.
    pub fn with_session(session: Session) -> Self {
        let vault = Self::new();
        *vault.session.lock().unwrap() = Some(session);
        vault
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the current session synchronously (for testing).
    pub fn get_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// Set the session synchronously (for testing).
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session;
    }
}

impl Default for InMemorySessionVault {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionVault for InMemorySessionVault {
    async fn load(&self) -> Result<Option<Session>, SessionVaultError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(SessionVaultError::LoadFailed("Mock load failure".to_string()));
        }

        Ok(self.session.lock().unwrap().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionVaultError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(SessionVaultError::SaveFailed("Mock save failure".to_string()));
        }

        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionVaultError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(SessionVaultError::ClearFailed("Mock clear failure".to_string()));
        }

        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
