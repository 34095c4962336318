//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures and a builder for wiring an
//! [`App`] over the mock storefront API and an in-memory session vault,
//! so flow tests never touch the network or the filesystem.
//!
//! # Example
//!
//! ```ignore
//! use common::{test_session, TestAppBuilder};
//!
//! let (mut app, api) = TestAppBuilder::new()
//!     .with_persisted_session(test_session())
//!     .build();
//! app.initialize().await;
//! ```

use std::sync::Arc;

use vastra::adapters::{InMemorySessionVault, MockStoreApi};
use vastra::app::App;
use vastra::auth::{Session, User};
use vastra::config::FlowConfig;
use vastra::traits::StoreApi;

// Not every test binary uses every helper; the allows keep the unused
// combinations quiet.

/// A member account used across tests.
#[allow(dead_code)]
pub fn test_user() -> User {
    User {
        id: Some("member-201".to_string()),
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@vastravilla.com".to_string(),
        phone: Some("9876543210".to_string()),
    }
}

/// A persisted session for [`test_user`].
#[allow(dead_code)]
pub fn test_session() -> Session {
    Session::new("session-token-201", test_user())
}

/// Builder for creating test App instances with various configurations.
#[derive(Default)]
#[allow(dead_code)]
pub struct TestAppBuilder {
    config: FlowConfig,
    persisted: Option<Session>,
}

#[allow(dead_code)]
impl TestAppBuilder {
    /// Creates a new TestAppBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the flow configuration.
    pub fn with_config(mut self, config: FlowConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the vault with a session, as if a previous run had signed in.
    ///
    /// The session only becomes visible after `app.initialize().await`
    /// hydrates the store.
    pub fn with_persisted_session(mut self, session: Session) -> Self {
        self.persisted = Some(session);
        self
    }

    /// Build the App plus a handle to the mock API for assertions.
    pub fn build(self) -> (App, Arc<MockStoreApi>) {
        let api = Arc::new(MockStoreApi::new());
        let vault = InMemorySessionVault::new();
        if let Some(session) = self.persisted {
            vault.set_session(Some(session));
        }
        let app = App::with_deps(
            self.config,
            Arc::clone(&api) as Arc<dyn StoreApi>,
            Arc::new(vault),
        );
        (app, api)
    }
}

/// Receive the next message produced by the app's spawned tasks and feed
/// it through the handler, mirroring one trip around the event loop.
#[allow(dead_code)]
pub async fn pump_message(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver present");
    let msg = rx.recv().await.expect("a message should arrive");
    app.message_rx = Some(rx);
    app.handle_message(msg).await;
}
