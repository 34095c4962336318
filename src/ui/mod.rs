//! UI rendering for the Vastra Villa terminal storefront
//!
//! Implements the boutique-styled interface with:
//! - Storefront: brand mark, session state, and navigation hints
//! - Login / Signup: form dialogs with inline validation
//! - Account: profile cards for the signed-in member
//! - A transient status line for request outcomes

mod account;
mod helpers;
mod login;
mod signup;
mod storefront;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIM, COLOR_ERROR, COLOR_TEXT,
    COLOR_VERIFIED,
};

// Re-export helpers for external use
pub use helpers::SPINNER_FRAMES;
pub use storefront::VASTRA_LOGO;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Screen};
use account::render_account_screen;
use login::render_login_screen;
use signup::render_signup_screen;
use storefront::render_storefront;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Storefront => render_storefront(frame, app),
        Screen::Login => render_login_screen(frame, app),
        Screen::Signup => render_signup_screen(frame, app),
        Screen::Account => render_account_screen(frame, app),
    }

    // Transient status line for request outcomes
    if let Some(message) = app.status_line() {
        render_status_line(frame, message);
    }
}

fn render_status_line(frame: &mut Frame, message: &str) {
    let area = frame.area();
    if area.height < 3 {
        return;
    }
    let row = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_ACCENT),
        )))
        .alignment(Alignment::Center),
        row,
    );
}
