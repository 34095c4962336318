//! AppMessage enum for async communication within the application.

use uuid::Uuid;

use crate::auth::{Identifier, Session};

/// Messages received from async auth operations.
///
/// Spawned request tasks send exactly one of these back over the app
/// channel; the select loop feeds them into `App::handle_message`.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The server accepted a send-OTP request for this destination
    OtpSent { destination: Identifier },
    /// The send-OTP request failed
    OtpSendFailed { message: String },
    /// The server confirmed the code for this challenge
    OtpVerified { challenge_id: Uuid },
    /// The server rejected the code for this challenge
    OtpVerifyFailed { challenge_id: Uuid, message: String },
    /// Login completed and produced a session
    LoginSucceeded { session: Session },
    /// Login was rejected
    LoginFailed { message: String },
    /// Registration completed and produced a session
    RegisterSucceeded { session: Session },
    /// Registration was rejected
    RegisterFailed { message: String },
    /// User asked to sign out (from the account screen)
    LogoutRequested,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{classify, IdentifierModes, User};

    #[test]
    fn test_messages_are_cloneable() {
        let destination = classify("shopper@vastravilla.com", IdentifierModes::EmailOrPhone)
            .expect("valid email");
        let msg = AppMessage::OtpSent { destination };
        let cloned = msg.clone();
        assert!(matches!(cloned, AppMessage::OtpSent { .. }));
    }

    #[test]
    fn test_login_succeeded_carries_session() {
        let user = User {
            id: Some("u-1".to_string()),
            name: "Asha Rao".to_string(),
            email: "asha@vastravilla.com".to_string(),
            phone: None,
        };
        let msg = AppMessage::LoginSucceeded {
            session: Session::new("token-1", user),
        };
        match msg {
            AppMessage::LoginSucceeded { session } => {
                assert_eq!(session.token, "token-1");
                assert_eq!(session.user.name, "Asha Rao");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_verify_failed_carries_challenge_id() {
        let id = Uuid::new_v4();
        let msg = AppMessage::OtpVerifyFailed {
            challenge_id: id,
            message: "Invalid OTP".to_string(),
        };
        match msg {
            AppMessage::OtpVerifyFailed { challenge_id, message } => {
                assert_eq!(challenge_id, id);
                assert_eq!(message, "Invalid OTP");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
