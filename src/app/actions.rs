//! Auth request dispatch for the App.
//!
//! These methods validate form state, then spawn async tasks that talk
//! to the store API and report back over the message channel:
//! - Send / verify OTP for the signup flow
//! - Login and register submits (single-flight via the submitter)

use std::sync::Arc;

use tracing::warn;

use crate::auth::{
    classify, is_valid_email, validate_login, validate_register, Field, IdentifierModes,
    RegisterInput, SubmitError, LOGIN_FALLBACK, REGISTER_FALLBACK, SEND_OTP_FALLBACK,
    VERIFY_OTP_FALLBACK,
};
use crate::error::VastraError;

use super::{App, AppMessage};

impl App {
    /// Send (or resend) the signup OTP to the email currently typed in.
    ///
    /// Validates the email locally first, then spawns the request. The
    /// challenge state itself only changes when the server accepts the
    /// send ([`AppMessage::OtpSent`]); the cooldown gate lives there.
    pub fn dispatch_send_otp(&mut self) {
        if !is_valid_email(self.signup_form.email.trim()) {
            self.signup_form
                .set_field_error(Field::Email, "Enter valid email address");
            return;
        }
        // Unwrap is safe: the shape check above is exactly what classify does
        let destination = match classify(&self.signup_form.email, IdentifierModes::EmailOnly) {
            Ok(d) => d,
            Err(_) => return,
        };

        if self.signup_form.sending_otp || !self.signup_form.otp.can_request() {
            return;
        }
        self.signup_form.sending_otp = true;

        let api = Arc::clone(&self.api);
        let tx = self.message_sender();
        tokio::spawn(async move {
            match api.send_otp(&destination).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::OtpSent { destination });
                }
                Err(e) => {
                    let message = e.user_message(SEND_OTP_FALLBACK);
                    let err = VastraError::from(e);
                    warn!(
                        code = err.error_code(),
                        category = %err.category(),
                        "send otp request failed"
                    );
                    let _ = tx.send(AppMessage::OtpSendFailed { message });
                }
            }
        });
    }

    /// Verify a completed OTP buffer against the server.
    ///
    /// Call with the code produced by `ready_code()`. Tags the request
    /// with the live challenge id so a late result for an abandoned
    /// challenge is dropped on arrival.
    pub fn dispatch_verify_otp(&mut self, code: String) {
        let destination = match self.signup_form.otp.destination().cloned() {
            Some(d) => d,
            None => return,
        };
        let challenge_id = self.signup_form.otp.begin_verify();

        let api = Arc::clone(&self.api);
        let tx = self.message_sender();
        tokio::spawn(async move {
            match api.verify_otp(&destination, &code).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::OtpVerified { challenge_id });
                }
                Err(e) => {
                    let message = e.user_message(VERIFY_OTP_FALLBACK);
                    let err = VastraError::from(e);
                    warn!(
                        code = err.error_code(),
                        category = %err.category(),
                        "otp verification failed"
                    );
                    let _ = tx.send(AppMessage::OtpVerifyFailed {
                        challenge_id,
                        message,
                    });
                }
            }
        });
    }

    /// Submit the login form.
    ///
    /// Validation failures land in the form's error line without any
    /// network traffic. While a submit is already in flight the call is
    /// a silent no-op; the submitter also enforces this internally.
    pub fn submit_login(&mut self) {
        if self.submitter.is_in_flight() {
            return;
        }
        self.login_form.error = None;

        let request = match validate_login(
            &self.login_form.identifier,
            &self.login_form.password,
            self.config.identifier_modes,
        ) {
            Ok(request) => request,
            Err(errors) => {
                // The login screen shows one message at a time, identifier first
                self.login_form.error = errors.into_iter().next().map(|(_, message)| message);
                return;
            }
        };

        let submitter = self.submitter.clone();
        let tx = self.message_sender();
        tokio::spawn(async move {
            match submitter.login(&request).await {
                Ok(session) => {
                    let _ = tx.send(AppMessage::LoginSucceeded { session });
                }
                // Lost the claim race; the winning submit reports instead
                Err(SubmitError::InFlight) => {}
                Err(SubmitError::Api(api_err)) => {
                    let message = api_err.user_message(LOGIN_FALLBACK);
                    let err = VastraError::from(api_err);
                    warn!(
                        code = err.error_code(),
                        category = %err.category(),
                        "login request failed"
                    );
                    let _ = tx.send(AppMessage::LoginFailed { message });
                }
            }
        });
    }

    /// Submit the signup form.
    ///
    /// Field-level validation failures land on the form; only a fully
    /// valid form (including a verified email) reaches the server.
    pub fn submit_register(&mut self) {
        if self.submitter.is_in_flight() {
            return;
        }
        self.signup_form.error = None;

        let input = RegisterInput {
            first_name: &self.signup_form.first_name,
            last_name: &self.signup_form.last_name,
            email: &self.signup_form.email,
            phone: &self.signup_form.phone,
            password: &self.signup_form.password,
            otp_verified: self.signup_form.otp.is_verified(),
        };
        let request = match validate_register(input, self.config.min_password_length) {
            Ok(request) => request,
            Err(errors) => {
                self.signup_form.field_errors = errors;
                return;
            }
        };

        let submitter = self.submitter.clone();
        let tx = self.message_sender();
        tokio::spawn(async move {
            match submitter.register(&request).await {
                Ok(session) => {
                    let _ = tx.send(AppMessage::RegisterSucceeded { session });
                }
                Err(SubmitError::InFlight) => {}
                Err(SubmitError::Api(api_err)) => {
                    let message = api_err.user_message(REGISTER_FALLBACK);
                    let err = VastraError::from(api_err);
                    warn!(
                        code = err.error_code(),
                        category = %err.category(),
                        "register request failed"
                    );
                    let _ = tx.send(AppMessage::RegisterFailed { message });
                }
            }
        });
    }

    /// Ask to sign out. Routed through the message channel so the
    /// session mutation happens in the async handler like every other
    /// state change.
    pub fn request_logout(&self) {
        let _ = self.message_tx.send(AppMessage::LogoutRequested);
    }
}
