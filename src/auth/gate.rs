//! Guard for views that require a signed-in user.
//!
//! The gate never redirects before hydration has settled, and it
//! redirects at most once per mount so a view cannot bounce the user
//! repeatedly. Navigating back to the protected view re-arms it.

use tracing::debug;

use crate::auth::store::{HydrationStatus, SessionStore};

/// What a protected view should do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session state unknown; show a placeholder, take no action.
    Pending,
    /// Signed in; render the protected content.
    Render,
    /// Signed out; leave the view. Issued at most once per mount.
    Redirect,
}

/// Per-view redirect latch over the shared [`SessionStore`].
#[derive(Debug, Default)]
pub struct AuthGate {
    redirected: bool,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the gate against current session state.
    pub fn evaluate(&mut self, store: &SessionStore) -> GateDecision {
        if store.status() == HydrationStatus::NotHydrated {
            return GateDecision::Pending;
        }
        if store.is_authenticated() {
            return GateDecision::Render;
        }
        if self.redirected {
            // Already sent the user away once this mount
            return GateDecision::Pending;
        }
        debug!("gate redirecting signed-out user");
        self.redirected = true;
        GateDecision::Redirect
    }

    /// Re-arm the latch. Call when the protected view is entered again.
    pub fn reset(&mut self) {
        self.redirected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemorySessionVault;
    use crate::auth::session::{Session, User};
    use std::sync::Arc;

    fn signed_out_store() -> SessionStore {
        SessionStore::new(Arc::new(InMemorySessionVault::new()))
    }

    async fn signed_in_store() -> SessionStore {
        let session = Session::new(
            "tok-1",
            User {
                id: None,
                name: "Priya Sharma".to_string(),
                email: "priya@example.com".to_string(),
                phone: None,
            },
        );
        let mut store = SessionStore::new(Arc::new(InMemorySessionVault::with_session(session)));
        store.hydrate().await;
        store
    }

    #[test]
    fn test_pending_before_hydration() {
        let store = signed_out_store();
        let mut gate = AuthGate::new();
        // However many frames render before hydration, nothing happens
        for _ in 0..5 {
            assert_eq!(gate.evaluate(&store), GateDecision::Pending);
        }
    }

    #[tokio::test]
    async fn test_render_when_signed_in() {
        let store = signed_in_store().await;
        let mut gate = AuthGate::new();
        assert_eq!(gate.evaluate(&store), GateDecision::Render);
        assert_eq!(gate.evaluate(&store), GateDecision::Render);
    }

    #[tokio::test]
    async fn test_redirect_once_when_signed_out() {
        let mut store = signed_out_store();
        store.hydrate().await;
        let mut gate = AuthGate::new();

        assert_eq!(gate.evaluate(&store), GateDecision::Redirect);
        // Repeated evaluation in the same mount never redirects again
        assert_eq!(gate.evaluate(&store), GateDecision::Pending);
        assert_eq!(gate.evaluate(&store), GateDecision::Pending);
    }

    #[tokio::test]
    async fn test_reset_rearms_redirect() {
        let mut store = signed_out_store();
        store.hydrate().await;
        let mut gate = AuthGate::new();

        assert_eq!(gate.evaluate(&store), GateDecision::Redirect);
        gate.reset();
        assert_eq!(gate.evaluate(&store), GateDecision::Redirect);
    }

    #[tokio::test]
    async fn test_sign_in_after_redirect_renders() {
        let vault = Arc::new(InMemorySessionVault::new());
        let mut store = SessionStore::new(Arc::clone(&vault) as Arc<_>);
        store.hydrate().await;
        let mut gate = AuthGate::new();

        assert_eq!(gate.evaluate(&store), GateDecision::Redirect);

        store
            .login(Session::new(
                "tok-2",
                User {
                    id: None,
                    name: "Asha Rao".to_string(),
                    email: "asha@example.com".to_string(),
                    phone: None,
                },
            ))
            .await;
        assert_eq!(gate.evaluate(&store), GateDecision::Render);
    }

    #[tokio::test]
    async fn test_hydration_flip_redirects_exactly_once() {
        let vault = Arc::new(InMemorySessionVault::new());
        let mut store = SessionStore::new(Arc::clone(&vault) as Arc<_>);
        let mut gate = AuthGate::new();

        assert_eq!(gate.evaluate(&store), GateDecision::Pending);
        store.hydrate().await;
        assert_eq!(gate.evaluate(&store), GateDecision::Redirect);
        assert_eq!(gate.evaluate(&store), GateDecision::Pending);
    }
}
