//! Account screen for the signed-in member
//!
//! Renders profile cards once a session is present. Before hydration, or
//! after sign-out while the redirect is pending, only the neutral frame
//! is drawn.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use super::helpers::{centered_rect, input_block, keybind_line, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CHAMPAGNE, COLOR_DIM, COLOR_OBSIDIAN, COLOR_TEXT,
};
use crate::app::App;
use crate::auth::HydrationStatus;

pub fn render_account_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Vastra Villa ",
            Style::default().fg(COLOR_ACCENT),
        ));
    frame.render_widget(outer_block, area);

    if app.store.status() == HydrationStatus::NotHydrated {
        return;
    }
    let session = match app.store.current() {
        Some(session) => session,
        // Signed out; the gate redirects on the next pass.
        None => return,
    };
    let user = &session.user;

    let dialog = centered_rect(46, 17, area);
    let rows = Layout::vertical([
        Constraint::Length(1), // kicker
        Constraint::Length(1),
        Constraint::Length(1), // avatar
        Constraint::Length(1), // name
        Constraint::Length(1),
        Constraint::Length(3), // name card
        Constraint::Length(3), // email card
        Constraint::Length(3), // phone card
        Constraint::Length(1),
        Constraint::Length(1), // hints
    ])
    .split(dialog);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "MEMBER PROFILE",
            Style::default().fg(COLOR_ACCENT),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );

    let initials = user.initials();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {initials} "),
            Style::default()
                .bg(COLOR_CHAMPAGNE)
                .fg(COLOR_OBSIDIAN)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            user.name.clone(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[3],
    );

    render_card(frame, rows[5], "Name", Some(&user.name));
    render_card(frame, rows[6], "Email", Some(&user.email));
    render_card(frame, rows[7], "Phone", user.phone.as_deref());

    frame.render_widget(
        Paragraph::new(keybind_line(&[
            ("l", "sign out"),
            ("Esc", "storefront"),
            ("q", "quit"),
        ]))
        .alignment(Alignment::Center),
        rows[9],
    );
}

/// Read-only profile card. A missing value renders the storefront's
/// "Not added" placeholder.
fn render_card(frame: &mut Frame, area: Rect, label: &str, value: Option<&str>) {
    let block = input_block(label, false, None);
    let budget = area.width.saturating_sub(2) as usize;
    let line = match value {
        Some(value) => Line::from(Span::styled(
            truncate_to_width(value, budget),
            Style::default().fg(COLOR_TEXT),
        )),
        None => Line::from(Span::styled(
            "Not added".to_string(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )),
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}
