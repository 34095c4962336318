//! Navigation methods for the App.

use tracing::debug;

use crate::auth::GateDecision;

use super::forms::{LoginForm, SignupForm};
use super::{App, Screen};

impl App {
    /// Go to the storefront (the landing screen).
    pub fn navigate_to_storefront(&mut self) {
        self.screen = Screen::Storefront;
    }

    /// Go to the login screen with a fresh form.
    ///
    /// A signed-in user has nothing to do here and is bounced straight
    /// back to the storefront.
    pub fn navigate_to_login(&mut self) {
        if self.store.is_authenticated() {
            debug!("login screen skipped; already signed in");
            self.screen = Screen::Storefront;
            return;
        }
        self.login_form = LoginForm::new();
        self.screen = Screen::Login;
    }

    /// Go to the signup screen with a fresh form.
    ///
    /// Bounces signed-in users back to the storefront, like
    /// [`navigate_to_login`](App::navigate_to_login).
    pub fn navigate_to_signup(&mut self) {
        if self.store.is_authenticated() {
            debug!("signup screen skipped; already signed in");
            self.screen = Screen::Storefront;
            return;
        }
        self.signup_form = SignupForm::new(self.config.otp_length);
        self.screen = Screen::Signup;
    }

    /// Go to the account screen.
    ///
    /// Re-arms the auth gate so a signed-out visitor gets exactly one
    /// redirect for this visit.
    pub fn navigate_to_account(&mut self) {
        self.gate.reset();
        self.screen = Screen::Account;
    }

    /// Run the account screen's auth gate for the current frame.
    ///
    /// Call before drawing while the account screen is active. While the
    /// session is still hydrating this is a no-op (the screen renders a
    /// placeholder); once hydration lands a signed-out visitor is sent to
    /// the login screen, exactly once per visit.
    pub fn apply_gate(&mut self) {
        if self.screen != Screen::Account {
            return;
        }
        match self.gate.evaluate(&self.store) {
            GateDecision::Pending | GateDecision::Render => {}
            GateDecision::Redirect => {
                self.navigate_to_login();
                self.mark_dirty();
            }
        }
    }
}
