//! Editable form state for the login and signup screens.
//!
//! Forms own their text buffers, focus, and error lines. Validation
//! lives in [`crate::auth::submit`]; the forms only decide which buffer
//! a keystroke lands in and keep error lines in sync with edits.

use crate::auth::{Field, FieldErrors, OtpChallenge, OtpFlowState};

use super::types::{LoginFocus, SignupFocus};

/// Phone numbers are plain 10-digit strings; longer input is dropped.
const PHONE_MAX_DIGITS: usize = 10;

/// State for the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Email or phone, as typed
    pub identifier: String,
    pub password: String,
    /// Render the password in clear text instead of masked
    pub show_password: bool,
    pub focus: LoginFocus,
    /// Error line under the form, from validation or a failed submit
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        match self.focus {
            LoginFocus::Identifier => self.identifier.push(c),
            LoginFocus::Password => self.password.push(c),
        }
    }

    /// Insert pasted text into the focused field.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            LoginFocus::Identifier => {
                self.identifier.pop();
            }
            LoginFocus::Password => {
                self.password.pop();
            }
        }
    }
}

/// State for the signup screen, including the embedded OTP challenge.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digits only, capped at ten
    pub phone: String,
    pub password: String,
    pub show_password: bool,
    pub focus: SignupFocus,
    /// Per-field error lines from the last failed validation
    pub field_errors: FieldErrors,
    /// Error line for a failed register submit
    pub error: Option<String>,
    /// A send-OTP request is on the wire (button shows a spinner)
    pub sending_otp: bool,
    pub otp: OtpChallenge,
}

impl SignupForm {
    pub fn new(otp_length: usize) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            show_password: false,
            focus: SignupFocus::default(),
            field_errors: Vec::new(),
            error: None,
            sending_otp: false,
            otp: OtpChallenge::new(otp_length),
        }
    }

    /// Whether the OTP digit row is drawn at all.
    ///
    /// The row appears once a code is on its way and stays up after a
    /// successful verification (frozen, in the verified style).
    pub fn otp_row_visible(&self) -> bool {
        self.otp.state() != OtpFlowState::Idle
    }

    /// Whether the OTP row is a focus stop.
    ///
    /// A verified row is display-only, so focus cycling skips it.
    pub fn otp_row_focusable(&self) -> bool {
        matches!(
            self.otp.state(),
            OtpFlowState::Sent | OtpFlowState::Verifying | OtpFlowState::Failed
        )
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.otp_row_focusable());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.otp_row_focusable());
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// The error line for one field, if the last validation flagged it.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Replace the error line for one field.
    pub fn set_field_error(&mut self, field: Field, message: impl Into<String>) {
        self.clear_field_error(field);
        self.field_errors.push((field, message.into()));
    }

    fn clear_field_error(&mut self, field: Field) {
        self.field_errors.retain(|(f, _)| *f != field);
    }

    /// Type a character into the focused field.
    ///
    /// Editing a field clears its error line. Editing the email abandons
    /// any OTP challenge in progress since the code was sent to the old
    /// address. The phone field accepts digits only.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            SignupFocus::Otp => {
                self.otp.push_digit(c);
                return;
            }
            _ if c.is_control() => return,
            SignupFocus::FirstName => {
                self.first_name.push(c);
                self.clear_field_error(Field::FirstName);
            }
            SignupFocus::LastName => {
                self.last_name.push(c);
                self.clear_field_error(Field::LastName);
            }
            SignupFocus::Email => {
                self.email.push(c);
                self.on_email_edited();
            }
            SignupFocus::Phone => {
                if c.is_ascii_digit() && self.phone.len() < PHONE_MAX_DIGITS {
                    self.phone.push(c);
                    self.clear_field_error(Field::Phone);
                }
            }
            SignupFocus::Password => {
                self.password.push(c);
                self.clear_field_error(Field::Password);
            }
        }
    }

    /// Insert pasted text into the focused field.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete from the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            SignupFocus::FirstName => {
                self.first_name.pop();
            }
            SignupFocus::LastName => {
                self.last_name.pop();
            }
            SignupFocus::Email => {
                if self.email.pop().is_some() {
                    self.on_email_edited();
                }
            }
            SignupFocus::Otp => {
                self.otp.pop_digit();
            }
            SignupFocus::Phone => {
                self.phone.pop();
            }
            SignupFocus::Password => {
                self.password.pop();
            }
        }
    }

    fn on_email_edited(&mut self) {
        self.clear_field_error(Field::Email);
        // A code sent to the previous address no longer proves anything
        if self.otp.state() != OtpFlowState::Idle {
            self.otp.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{classify, IdentifierModes};

    fn signup() -> SignupForm {
        SignupForm::new(4)
    }

    fn email_identifier(raw: &str) -> crate::auth::Identifier {
        classify(raw, IdentifierModes::EmailOrPhone).expect("valid identifier")
    }

    #[test]
    fn test_login_typing_targets_focused_field() {
        let mut form = LoginForm::new();
        form.insert_str("a@b.co");
        assert_eq!(form.identifier, "a@b.co");

        form.focus_next();
        form.insert_str("hunter2");
        assert_eq!(form.password, "hunter2");
        assert_eq!(form.identifier, "a@b.co");
    }

    #[test]
    fn test_login_backspace_and_control_chars() {
        let mut form = LoginForm::new();
        form.insert_str("ab");
        form.insert_char('\n');
        form.backspace();
        assert_eq!(form.identifier, "a");
        // Backspace on empty is a no-op
        form.backspace();
        form.backspace();
        assert_eq!(form.identifier, "");
    }

    #[test]
    fn test_signup_phone_filters_non_digits_and_caps_length() {
        let mut form = signup();
        form.focus = SignupFocus::Phone;
        form.insert_str("(987) 654-3210 x99");
        assert_eq!(form.phone, "9876543210");
    }

    #[test]
    fn test_signup_edit_clears_field_error() {
        let mut form = signup();
        form.field_errors = vec![(Field::FirstName, "First name is required".to_string())];
        form.focus = SignupFocus::FirstName;
        form.insert_char('A');
        assert!(form.field_error(Field::FirstName).is_none());
    }

    #[test]
    fn test_signup_email_edit_resets_challenge() {
        let mut form = signup();
        form.focus = SignupFocus::Email;
        form.insert_str("shopper@vastravilla.com");
        form.otp
            .request(email_identifier("shopper@vastravilla.com"))
            .expect("send accepted");
        assert!(form.otp_row_visible());

        form.backspace();
        assert_eq!(form.otp.state(), OtpFlowState::Idle);
        assert!(!form.otp_row_visible());
    }

    #[test]
    fn test_signup_email_edit_discards_verified_badge() {
        let mut form = signup();
        form.focus = SignupFocus::Email;
        form.insert_str("shopper@vastravilla.com");
        form.otp
            .request(email_identifier("shopper@vastravilla.com"))
            .expect("send accepted");
        for c in "1234".chars() {
            form.otp.push_digit(c);
        }
        form.otp.ready_code();
        let id = form.otp.begin_verify();
        form.otp.resolve_verify(id, Ok(()));
        assert!(form.otp.is_verified());

        form.insert_char('x');
        assert!(!form.otp.is_verified());
    }

    #[test]
    fn test_signup_otp_focus_routes_digits_to_challenge() {
        let mut form = signup();
        form.otp
            .request(email_identifier("shopper@vastravilla.com"))
            .expect("send accepted");
        form.focus = SignupFocus::Otp;
        form.insert_char('4');
        form.insert_char('x');
        assert_eq!(form.otp.slots(), &["4", "", "", ""]);
        form.backspace();
        assert!(form.otp.slots().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_signup_focus_cycles_past_otp_after_verify() {
        let mut form = signup();
        form.otp
            .request(email_identifier("shopper@vastravilla.com"))
            .expect("send accepted");
        for c in "1234".chars() {
            form.otp.push_digit(c);
        }
        form.otp.ready_code();
        let id = form.otp.begin_verify();
        form.focus = SignupFocus::Otp;
        form.otp.resolve_verify(id, Ok(()));

        // Row stays visible but is no longer a focus stop
        assert!(form.otp_row_visible());
        assert!(!form.otp_row_focusable());
        form.focus_next();
        assert_eq!(form.focus, SignupFocus::Phone);
        form.focus_prev();
        assert_eq!(form.focus, SignupFocus::Email);
    }
}
