//! Message handling for the App.

use tracing::debug;

use crate::auth::Field;

use super::forms::{LoginForm, SignupForm};
use super::types::SignupFocus;
use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    ///
    /// All message handlers mark the app as dirty since they update
    /// visible state. Async because successful auth results touch the
    /// session vault.
    pub async fn handle_message(&mut self, msg: AppMessage) {
        // All messages result in state changes that require a redraw
        self.mark_dirty();
        match msg {
            AppMessage::OtpSent { destination } => {
                self.signup_form.sending_otp = false;
                match self.signup_form.otp.request(destination) {
                    Ok(_) => {
                        self.set_status("OTP sent to email");
                        // Put the cursor straight into the first digit box
                        self.signup_form.focus = SignupFocus::Otp;
                    }
                    Err(e) => {
                        // The challenge moved on while the send was in
                        // flight (verify landed, or the email changed)
                        debug!(error = %e, "otp send result ignored");
                    }
                }
            }
            AppMessage::OtpSendFailed { message } => {
                self.signup_form.sending_otp = false;
                self.signup_form.set_field_error(Field::Email, message);
            }
            AppMessage::OtpVerified { challenge_id } => {
                self.signup_form.otp.resolve_verify(challenge_id, Ok(()));
                if self.signup_form.otp.is_verified() {
                    self.set_status("Email Verified Successfully");
                    // The verified row is frozen; move on to the next field
                    if self.signup_form.focus == SignupFocus::Otp {
                        self.signup_form.focus = SignupFocus::Phone;
                    }
                }
            }
            AppMessage::OtpVerifyFailed {
                challenge_id,
                message,
            } => {
                self.signup_form
                    .otp
                    .resolve_verify(challenge_id, Err(message));
            }
            AppMessage::LoginSucceeded { session } => {
                self.store.login(session).await;
                self.login_form = LoginForm::new();
                self.set_status("Login successful");
                self.navigate_to_storefront();
            }
            AppMessage::LoginFailed { message } => {
                self.login_form.error = Some(message);
            }
            AppMessage::RegisterSucceeded { session } => {
                self.store.login(session).await;
                self.signup_form = SignupForm::new(self.config.otp_length);
                self.set_status("Account Created Successfully");
                self.navigate_to_storefront();
            }
            AppMessage::RegisterFailed { message } => {
                self.signup_form.error = Some(message);
            }
            AppMessage::LogoutRequested => {
                self.store.logout().await;
                self.set_status("Logged out successfully");
                self.navigate_to_storefront();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{classify, Identifier, IdentifierModes, OtpFlowState, Session, User};
    use crate::app::Screen;
    use uuid::Uuid;

    fn email() -> Identifier {
        classify("shopper@vastravilla.com", IdentifierModes::EmailOrPhone).expect("valid email")
    }

    fn session() -> Session {
        Session::new(
            "token-1",
            User {
                id: Some("u-1".to_string()),
                name: "Asha Rao".to_string(),
                email: "shopper@vastravilla.com".to_string(),
                phone: None,
            },
        )
    }

    #[tokio::test]
    async fn test_otp_sent_starts_challenge_and_focuses_row() {
        let mut app = App::for_tests();
        app.signup_form.sending_otp = true;

        app.handle_message(AppMessage::OtpSent {
            destination: email(),
        })
        .await;

        assert!(!app.signup_form.sending_otp);
        assert_eq!(app.signup_form.otp.state(), OtpFlowState::Sent);
        assert_eq!(app.signup_form.focus, SignupFocus::Otp);
        assert_eq!(app.status_line(), Some("OTP sent to email"));
    }

    #[tokio::test]
    async fn test_otp_send_failed_lands_on_email_field() {
        let mut app = App::for_tests();
        app.signup_form.sending_otp = true;

        app.handle_message(AppMessage::OtpSendFailed {
            message: "Too many requests".to_string(),
        })
        .await;

        assert!(!app.signup_form.sending_otp);
        assert_eq!(
            app.signup_form.field_error(Field::Email),
            Some("Too many requests")
        );
        assert_eq!(app.signup_form.otp.state(), OtpFlowState::Idle);
    }

    #[tokio::test]
    async fn test_otp_verified_settles_challenge_and_advances_focus() {
        let mut app = App::for_tests();
        app.signup_form.otp.request(email()).expect("send accepted");
        for c in "1234".chars() {
            app.signup_form.otp.push_digit(c);
        }
        app.signup_form.otp.ready_code();
        let id = app.signup_form.otp.begin_verify();
        app.signup_form.focus = SignupFocus::Otp;

        app.handle_message(AppMessage::OtpVerified { challenge_id: id })
            .await;

        assert!(app.signup_form.otp.is_verified());
        assert_eq!(app.signup_form.focus, SignupFocus::Phone);
        assert_eq!(app.status_line(), Some("Email Verified Successfully"));
    }

    #[tokio::test]
    async fn test_stale_otp_result_is_discarded() {
        let mut app = App::for_tests();
        app.signup_form.otp.request(email()).expect("send accepted");

        app.handle_message(AppMessage::OtpVerified {
            challenge_id: Uuid::new_v4(),
        })
        .await;

        assert!(!app.signup_form.otp.is_verified());
        assert_eq!(app.signup_form.otp.state(), OtpFlowState::Sent);
    }

    #[tokio::test]
    async fn test_otp_verify_failed_keeps_buffer_editable() {
        let mut app = App::for_tests();
        app.signup_form.otp.request(email()).expect("send accepted");
        for c in "1234".chars() {
            app.signup_form.otp.push_digit(c);
        }
        app.signup_form.otp.ready_code();
        let id = app.signup_form.otp.begin_verify();

        app.handle_message(AppMessage::OtpVerifyFailed {
            challenge_id: id,
            message: "Invalid OTP".to_string(),
        })
        .await;

        assert_eq!(app.signup_form.otp.state(), OtpFlowState::Failed);
        assert_eq!(app.signup_form.otp.last_error(), Some("Invalid OTP"));
        assert!(app.signup_form.otp.pop_digit());
    }

    #[tokio::test]
    async fn test_login_succeeded_signs_in_and_returns_to_storefront() {
        let mut app = App::for_tests();
        app.store.hydrate().await;
        app.navigate_to_login();
        app.login_form.identifier = "shopper@vastravilla.com".to_string();

        app.handle_message(AppMessage::LoginSucceeded { session: session() })
            .await;

        assert!(app.store.is_authenticated());
        assert_eq!(app.screen, Screen::Storefront);
        assert!(app.login_form.identifier.is_empty());
        assert_eq!(app.status_line(), Some("Login successful"));
    }

    #[tokio::test]
    async fn test_login_failed_sets_form_error() {
        let mut app = App::for_tests();
        app.handle_message(AppMessage::LoginFailed {
            message: "Invalid credentials".to_string(),
        })
        .await;

        assert_eq!(app.login_form.error.as_deref(), Some("Invalid credentials"));
        assert!(!app.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_succeeded_resets_signup_form() {
        let mut app = App::for_tests();
        app.store.hydrate().await;
        app.signup_form.first_name = "Asha".to_string();

        app.handle_message(AppMessage::RegisterSucceeded { session: session() })
            .await;

        assert!(app.store.is_authenticated());
        assert!(app.signup_form.first_name.is_empty());
        assert_eq!(app.screen, Screen::Storefront);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_returns_to_storefront() {
        let mut app = App::for_tests();
        app.store.hydrate().await;
        app.store.login(session()).await;
        app.navigate_to_account();
        app.apply_gate();
        assert_eq!(app.screen, Screen::Account);

        app.handle_message(AppMessage::LogoutRequested).await;

        assert!(!app.store.is_authenticated());
        assert_eq!(app.screen, Screen::Storefront);
        assert_eq!(app.status_line(), Some("Logged out successfully"));
    }
}
