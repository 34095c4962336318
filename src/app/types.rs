//! Type definitions for the application state.
//!
//! Contains enums used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`LoginFocus`] - Which login field has focus
//! - [`SignupFocus`] - Which signup field has focus

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Storefront,
    Login,
    Signup,
    Account,
}

/// Represents which login form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Identifier,
    Password,
}

impl LoginFocus {
    /// Cycle to the next field (wraps around)
    pub fn next(self) -> Self {
        match self {
            Self::Identifier => Self::Password,
            Self::Password => Self::Identifier,
        }
    }

    /// Cycle to the previous field (wraps around)
    pub fn prev(self) -> Self {
        // Two fields, so prev == next
        self.next()
    }
}

/// Represents which signup form field has focus.
///
/// The `Otp` stop only exists while a code has been sent; focus cycling
/// skips it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFocus {
    #[default]
    FirstName,
    LastName,
    Email,
    Otp,
    Phone,
    Password,
}

impl SignupFocus {
    /// Cycle to the next field, including the OTP row only when live
    pub fn next(self, otp_row_visible: bool) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Email,
            Self::Email => {
                if otp_row_visible {
                    Self::Otp
                } else {
                    Self::Phone
                }
            }
            Self::Otp => Self::Phone,
            Self::Phone => Self::Password,
            Self::Password => Self::FirstName,
        }
    }

    /// Cycle to the previous field, including the OTP row only when live
    pub fn prev(self, otp_row_visible: bool) -> Self {
        match self {
            Self::FirstName => Self::Password,
            Self::LastName => Self::FirstName,
            Self::Email => Self::LastName,
            Self::Otp => Self::Email,
            Self::Phone => {
                if otp_row_visible {
                    Self::Otp
                } else {
                    Self::Email
                }
            }
            Self::Password => Self::Phone,
        }
    }
}
