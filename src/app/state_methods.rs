//! State accessor and utility methods for the App.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::auth::OtpFlowState;

use super::{App, AppMessage};

/// How long a transient status line stays on screen.
const STATUS_LINE_SECS: u64 = 3;

impl App {
    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw on the next frame
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether any auth request is currently on the wire.
    ///
    /// Used to keep spinner frames animating between input events.
    pub fn is_busy(&self) -> bool {
        self.submitter.is_in_flight()
            || self.signup_form.sending_otp
            || self.signup_form.otp.state() == OtpFlowState::Verifying
    }

    /// Transient confirmation line shown at the bottom of the screen.
    pub fn status_line(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Show a short-lived confirmation line.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(text.into());
        self.status_deadline = Some(Instant::now() + Duration::from_secs(STATUS_LINE_SECS));
        self.mark_dirty();
    }

    /// Advance animations and timers. Called every loop tick (~16ms).
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        // Spinners draw from tick_count, so animate while work is in flight
        if self.is_busy() {
            self.mark_dirty();
        }

        // Drive the resend cooldown at one tick per second, independent of
        // the frame cadence
        while self.cooldown_tick.elapsed() >= Duration::from_secs(1) {
            self.cooldown_tick += Duration::from_secs(1);
            if self.signup_form.otp.tick_cooldown() {
                self.mark_dirty();
            }
        }

        // Expire the status line
        if let Some(deadline) = self.status_deadline {
            if Instant::now() >= deadline {
                self.status = None;
                self.status_deadline = None;
                self.mark_dirty();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_dirty_and_quit() {
        let mut app = App::for_tests();
        app.needs_redraw = false;
        app.mark_dirty();
        assert!(app.needs_redraw);

        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_wraps_counter() {
        let mut app = App::for_tests();
        app.tick_count = u64::MAX;
        app.tick();
        assert_eq!(app.tick_count, 0);
    }

    #[test]
    fn test_status_line_set_and_read() {
        let mut app = App::for_tests();
        assert!(app.status_line().is_none());
        app.set_status("Login successful");
        assert_eq!(app.status_line(), Some("Login successful"));
    }

    #[test]
    fn test_cooldown_ticks_once_per_elapsed_second() {
        let mut app = App::for_tests();
        let destination = crate::auth::classify(
            "shopper@vastravilla.com",
            crate::auth::IdentifierModes::EmailOrPhone,
        )
        .expect("valid email");
        app.signup_form.otp.request(destination).expect("send accepted");
        let before = app.signup_form.otp.cooldown();

        // Pretend two seconds have passed since the last cooldown tick
        app.cooldown_tick = Instant::now() - Duration::from_secs(2);
        app.tick();
        assert_eq!(app.signup_form.otp.cooldown(), before - 2);

        // Immediately ticking again inside the same second changes nothing
        app.tick();
        assert_eq!(app.signup_form.otp.cooldown(), before - 2);
    }
}
