//! One-time-passcode challenge state machine.
//!
//! Models the request/verify lifecycle for an OTP sent to an email or
//! phone identifier: a fixed-width digit buffer the user fills in, a
//! resend cooldown, and async verification keyed by a challenge id so
//! results from an abandoned challenge cannot corrupt a newer one.
//!
//! The machine is pure: the caller performs the actual HTTP calls and
//! feeds outcomes back via [`OtpChallenge::resolve_verify`]. Cooldown
//! decay is driven by the caller's once-per-second tick.

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::identifier::Identifier;

/// Seconds a user must wait between OTP sends.
pub const RESEND_COOLDOWN_SECS: u32 = 120;

/// Lifecycle of a single challenge.
///
/// `Failed` is transient: the buffer stays editable and a retry
/// (re-entry or resend) is expected. `Verified` settles the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpFlowState {
    #[default]
    Idle,
    Sent,
    Verifying,
    Verified,
    Failed,
}

/// Why a send request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Resend available in {remaining}s")]
    CooldownActive { remaining: u32 },
    #[error("Verification already in progress")]
    VerifyInFlight,
    #[error("Code already verified")]
    AlreadyVerified,
}

/// Stateful OTP challenge: digit slots, focus, cooldown, and verify state.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    state: OtpFlowState,
    /// Identity of the current challenge; regenerated on every send so
    /// stale async results can be discarded.
    challenge_id: Uuid,
    /// Where the code was sent. `None` until the first successful send.
    destination: Option<Identifier>,
    /// One digit per slot; empty string means unfilled.
    slots: Vec<String>,
    /// Index of the slot receiving the next digit.
    focused: usize,
    /// Seconds until resend is allowed again.
    cooldown: u32,
    /// Bumped on every buffer edit; a new fill generation re-arms the
    /// one-shot auto-submit.
    fill_generation: u64,
    /// Generation for which `ready_code` already fired, if any.
    fired_generation: Option<u64>,
    /// Message from the last failed verification.
    last_error: Option<String>,
}

impl OtpChallenge {
    /// Create an idle challenge with `code_len` digit slots (4 or 6).
    pub fn new(code_len: usize) -> Self {
        Self {
            state: OtpFlowState::Idle,
            challenge_id: Uuid::new_v4(),
            destination: None,
            slots: vec![String::new(); code_len],
            focused: 0,
            cooldown: 0,
            fill_generation: 0,
            fired_generation: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> OtpFlowState {
        self.state
    }

    pub fn challenge_id(&self) -> Uuid {
        self.challenge_id
    }

    pub fn destination(&self) -> Option<&Identifier> {
        self.destination.as_ref()
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn code_len(&self) -> usize {
        self.slots.len()
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.state == OtpFlowState::Verified
    }

    /// Whether a (re)send is currently permitted.
    ///
    /// A verified or in-flight challenge cannot be resent; otherwise the
    /// cooldown is the only gate.
    pub fn can_request(&self) -> bool {
        matches!(
            self.state,
            OtpFlowState::Idle | OtpFlowState::Sent | OtpFlowState::Failed
        ) && self.cooldown == 0
    }

    /// Record a successful send: fresh challenge id, empty buffer, armed
    /// auto-submit, full cooldown.
    ///
    /// Call this after the send API call succeeds; use [`can_request`]
    /// to gate dispatching the call in the first place.
    ///
    /// [`can_request`]: OtpChallenge::can_request
    pub fn request(&mut self, destination: Identifier) -> Result<Uuid, OtpError> {
        match self.state {
            OtpFlowState::Verifying => return Err(OtpError::VerifyInFlight),
            OtpFlowState::Verified => return Err(OtpError::AlreadyVerified),
            OtpFlowState::Idle | OtpFlowState::Sent | OtpFlowState::Failed => {
                if self.cooldown > 0 {
                    return Err(OtpError::CooldownActive {
                        remaining: self.cooldown,
                    });
                }
            }
        }

        self.challenge_id = Uuid::new_v4();
        self.destination = Some(destination);
        for slot in &mut self.slots {
            slot.clear();
        }
        self.focused = 0;
        self.fill_generation = self.fill_generation.wrapping_add(1);
        self.fired_generation = None;
        self.last_error = None;
        self.cooldown = RESEND_COOLDOWN_SECS;
        self.state = OtpFlowState::Sent;

        debug!(challenge_id = %self.challenge_id, "otp challenge sent");
        Ok(self.challenge_id)
    }

    /// Decrement the resend cooldown by one second.
    ///
    /// Returns `true` if the value changed (caller redraws the timer).
    pub fn tick_cooldown(&mut self) -> bool {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            true
        } else {
            false
        }
    }

    /// Type a digit into the focused slot and advance focus.
    ///
    /// Non-digit input is ignored entirely. Editing is only possible
    /// while a challenge is live and not mid-verify; a settled
    /// (`Verified`) challenge ignores edits. Returns `true` if the
    /// buffer changed.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        if !self.editable() {
            return false;
        }

        self.slots[self.focused] = c.to_string();
        self.focused = (self.focused + 1).min(self.slots.len() - 1);
        self.fill_generation = self.fill_generation.wrapping_add(1);
        true
    }

    /// Backspace: clear the focused slot, or step back and clear the
    /// previous one when the focused slot is already empty.
    ///
    /// Returns `true` if the buffer changed.
    pub fn pop_digit(&mut self) -> bool {
        if !self.editable() {
            return false;
        }

        if !self.slots[self.focused].is_empty() {
            self.slots[self.focused].clear();
        } else if self.focused > 0 {
            self.focused -= 1;
            self.slots[self.focused].clear();
        } else {
            return false;
        }

        self.fill_generation = self.fill_generation.wrapping_add(1);
        true
    }

    /// The joined code, exactly once per complete fill.
    ///
    /// Returns `Some` when every slot holds a digit, the state permits
    /// verification, and this fill generation has not fired yet. The
    /// call arms the one-shot guard; editing the buffer or a new send
    /// re-arms it.
    pub fn ready_code(&mut self) -> Option<String> {
        if !matches!(self.state, OtpFlowState::Sent | OtpFlowState::Failed) {
            return None;
        }
        if self.slots.iter().any(|s| s.is_empty()) {
            return None;
        }
        if self.fired_generation == Some(self.fill_generation) {
            return None;
        }

        self.fired_generation = Some(self.fill_generation);
        Some(self.slots.concat())
    }

    /// Move into `Verifying` and return the challenge id to tag the
    /// async verify call with.
    pub fn begin_verify(&mut self) -> Uuid {
        if matches!(self.state, OtpFlowState::Sent | OtpFlowState::Failed) {
            self.state = OtpFlowState::Verifying;
            self.last_error = None;
        }
        self.challenge_id
    }

    /// Apply the result of an async verification.
    ///
    /// Results tagged with a stale challenge id, or arriving when no
    /// verification is in flight, are discarded.
    pub fn resolve_verify(&mut self, challenge_id: Uuid, outcome: Result<(), String>) {
        if challenge_id != self.challenge_id {
            debug!(stale = %challenge_id, current = %self.challenge_id, "discarding stale otp result");
            return;
        }
        if self.state != OtpFlowState::Verifying {
            debug!(state = ?self.state, "otp result ignored; no verification in flight");
            return;
        }

        match outcome {
            Ok(()) => {
                self.state = OtpFlowState::Verified;
                debug!(challenge_id = %self.challenge_id, "otp verified");
            }
            Err(message) => {
                self.state = OtpFlowState::Failed;
                self.last_error = Some(message);
            }
        }
    }

    /// Abandon the challenge entirely, e.g. when the destination
    /// identifier is edited after a code was sent.
    pub fn reset(&mut self) {
        let len = self.slots.len();
        *self = Self::new(len);
    }

    fn editable(&self) -> bool {
        matches!(self.state, OtpFlowState::Sent | OtpFlowState::Failed)
    }
}

/// Render remaining cooldown seconds as `mm:ss`.
pub fn format_cooldown(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
