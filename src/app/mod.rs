//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`LoginForm`] / [`SignupForm`] - Editable form state
//! - [`AppMessage`] - Messages for async communication

mod actions;
mod forms;
mod handlers;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use forms::{LoginForm, SignupForm};
pub use messages::AppMessage;
pub use types::{LoginFocus, Screen, SignupFocus};

use std::sync::Arc;
use std::time::Instant;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::adapters::FileSessionVault;
use crate::auth::{AuthGate, CredentialSubmitter, SessionStore, StoreApiClient};
use crate::config::FlowConfig;
use crate::traits::{SessionVault, StoreApi};

/// Main application state for the storefront client.
pub struct App {
    /// Whether the app should quit on the next loop iteration
    pub should_quit: bool,
    /// Which screen is currently displayed
    pub screen: Screen,
    /// Persisted session plus hydration state
    pub store: SessionStore,
    /// Redirect-once gate for the account screen
    pub gate: AuthGate,
    /// Login/register submits with the single-flight guard
    pub submitter: CredentialSubmitter,
    /// Storefront API handle for OTP traffic
    pub api: Arc<dyn StoreApi>,
    /// Flow tuning (identifier modes, OTP length, API URL)
    pub config: FlowConfig,
    /// Login screen state
    pub login_form: LoginForm,
    /// Signup screen state, including the OTP challenge
    pub signup_form: SignupForm,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Loop tick counter, drives spinner frames
    pub tick_count: u64,
    /// Whether the UI needs redrawing on the next frame
    pub needs_redraw: bool,
    /// Transient confirmation line and when to drop it
    status: Option<String>,
    status_deadline: Option<Instant>,
    /// Second boundary for the OTP resend cooldown
    cooldown_tick: Instant,
}

impl App {
    /// Create an App wired to the real filesystem vault and HTTP client.
    pub fn new(config: FlowConfig) -> Result<Self> {
        let vault: Arc<dyn SessionVault> = match &config.session_path {
            Some(path) => Arc::new(FileSessionVault::with_path(path.clone())),
            None => Arc::new(FileSessionVault::new()?),
        };
        let api: Arc<dyn StoreApi> =
            Arc::new(StoreApiClient::with_base_url(config.api_url.clone()));
        Ok(Self::with_deps(config, api, vault))
    }

    /// Create an App over explicit API and vault implementations.
    ///
    /// This is the injection seam: production wiring and tests both go
    /// through here.
    pub fn with_deps(
        config: FlowConfig,
        api: Arc<dyn StoreApi>,
        vault: Arc<dyn SessionVault>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let otp_length = config.otp_length;

        Self {
            should_quit: false,
            screen: Screen::default(),
            store: SessionStore::new(vault),
            gate: AuthGate::new(),
            submitter: CredentialSubmitter::new(Arc::clone(&api)),
            api,
            config,
            login_form: LoginForm::new(),
            signup_form: SignupForm::new(otp_length),
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true, // Start with redraw needed
            status: None,
            status_deadline: None,
            cooldown_tick: Instant::now(),
        }
    }

    /// Load persisted state before the first frame.
    ///
    /// Hydrates the session from the vault; a missing or unreadable
    /// record simply leaves the app signed out.
    pub async fn initialize(&mut self) {
        self.store.hydrate().await;
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::for_tests_with_api().0
    }

    #[cfg(test)]
    pub(crate) fn for_tests_with_api() -> (Self, Arc<crate::adapters::MockStoreApi>) {
        use crate::adapters::{InMemorySessionVault, MockStoreApi};
        let api = Arc::new(MockStoreApi::new());
        let app = Self::with_deps(
            FlowConfig::default(),
            Arc::clone(&api) as Arc<dyn StoreApi>,
            Arc::new(InMemorySessionVault::new()),
        );
        (app, api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionVault;
    use crate::auth::{HydrationStatus, Session, User};

    #[test]
    fn test_app_starts_on_storefront_and_signed_out() {
        let app = App::for_tests();
        assert_eq!(app.screen, Screen::Storefront);
        assert!(!app.should_quit);
        assert!(app.needs_redraw);
        assert!(!app.store.is_authenticated());
        assert_eq!(app.store.status(), HydrationStatus::NotHydrated);
    }

    #[tokio::test]
    async fn test_initialize_hydrates_persisted_session() {
        use crate::adapters::MockStoreApi;

        let vault = InMemorySessionVault::new();
        vault.set_session(Some(Session::new(
            "token-1",
            User {
                id: None,
                name: "Asha Rao".to_string(),
                email: "asha@vastravilla.com".to_string(),
                phone: None,
            },
        )));
        let mut app = App::with_deps(
            FlowConfig::default(),
            Arc::new(MockStoreApi::new()),
            Arc::new(vault),
        );

        app.initialize().await;
        assert_eq!(app.store.status(), HydrationStatus::Hydrated);
        assert!(app.store.is_authenticated());
        assert_eq!(app.store.token(), Some("token-1"));
    }

    #[test]
    fn test_signup_form_uses_configured_otp_length() {
        use crate::adapters::MockStoreApi;

        let config = FlowConfig::default().with_otp_length(6);
        let app = App::with_deps(
            config,
            Arc::new(MockStoreApi::new()),
            Arc::new(InMemorySessionVault::new()),
        );
        assert_eq!(app.signup_form.otp.code_len(), 6);
    }

    #[test]
    fn test_message_channel_round_trip() {
        let mut app = App::for_tests();
        app.message_sender()
            .send(AppMessage::LogoutRequested)
            .expect("send works");
        let mut rx = app.message_rx.take().expect("receiver present");
        assert!(matches!(rx.try_recv(), Ok(AppMessage::LogoutRequested)));
    }
}
