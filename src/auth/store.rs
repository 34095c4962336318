//! In-memory session state with explicit hydration.
//!
//! The store owns the current session for the lifetime of the app and
//! distinguishes "haven't looked at disk yet" from "looked, nobody is
//! signed in". Protected views key off that distinction through
//! [`crate::auth::gate::AuthGate`].

use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::session::Session;
use crate::traits::SessionVault;

/// Whether the persisted session has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrationStatus {
    #[default]
    NotHydrated,
    Hydrated,
}

/// Holds the current session and its hydration status, backed by a
/// [`SessionVault`] for persistence.
pub struct SessionStore {
    vault: Arc<dyn SessionVault>,
    current: Option<Session>,
    status: HydrationStatus,
}

impl SessionStore {
    pub fn new(vault: Arc<dyn SessionVault>) -> Self {
        Self {
            vault,
            current: None,
            status: HydrationStatus::NotHydrated,
        }
    }

    pub fn status(&self) -> HydrationStatus {
        self.status
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Read the persisted session once at startup.
    ///
    /// Missing or unrecoverable state resolves to the signed-out state;
    /// the vault is responsible for discarding corrupt records. Repeat
    /// calls are no-ops.
    pub async fn hydrate(&mut self) {
        if self.status == HydrationStatus::Hydrated {
            return;
        }

        match self.vault.load().await {
            Ok(Some(session)) => {
                info!(email = %session.user.email, "session hydrated");
                self.current = Some(session);
            }
            Ok(None) => {
                info!("no persisted session");
            }
            Err(e) => {
                // Treat storage trouble like a signed-out state
                warn!("session hydrate failed: {}", e);
            }
        }

        self.status = HydrationStatus::Hydrated;
    }

    /// Establish a session: set it current and persist the record.
    ///
    /// A persistence failure is logged but does not undo the in-memory
    /// sign-in; the user just won't survive a restart.
    pub async fn login(&mut self, session: Session) {
        if let Err(e) = self.vault.save(&session).await {
            warn!("session persist failed: {}", e);
        }
        info!(email = %session.user.email, "signed in");
        self.current = Some(session);
    }

    /// End the session: drop it from memory and delete the record.
    pub async fn logout(&mut self) {
        if let Err(e) = self.vault.clear().await {
            warn!("session clear failed: {}", e);
        }
        info!("signed out");
        self.current = None;
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current)
            .field("status", &self.status)
            .finish()
    }
}
