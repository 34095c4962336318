//! Storefront landing screen
//!
//! The entry hub: brand mark, session state, and navigation hints.

use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;

use super::helpers::{centered_rect, keybind_line};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};
use crate::app::App;

/// Block-letter brand mark shown on the storefront screen
pub const VASTRA_LOGO: &[&str] = &[
    "██╗   ██╗ █████╗ ███████╗████████╗██████╗  █████╗ ",
    "██║   ██║██╔══██╗██╔════╝╚══██╔══╝██╔══██╗██╔══██╗",
    "██║   ██║███████║███████╗   ██║   ██████╔╝███████║",
    "╚██╗ ██╔╝██╔══██║╚════██║   ██║   ██╔══██╗██╔══██║",
    " ╚████╔╝ ██║  ██║███████║   ██║   ██║  ██║██║  ██║",
    "  ╚═══╝  ╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝",
];

pub fn render_storefront(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let dialog = centered_rect(56, 14, area);
    let rows = Layout::vertical([
        Constraint::Length(6), // logo
        Constraint::Length(1), // wordmark
        Constraint::Length(1),
        Constraint::Length(1), // tagline
        Constraint::Length(1),
        Constraint::Length(1), // session line
        Constraint::Length(1),
        Constraint::Length(1), // hints
    ])
    .split(dialog);

    let logo_lines: Vec<Line> = VASTRA_LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(COLOR_ACCENT))))
        .collect();
    frame.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "V I L L A",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Instant secure access · Premium shopping flow",
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center),
        rows[3],
    );

    let session_line = match app.store.current() {
        Some(session) => Line::from(vec![
            Span::styled("Signed in as ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                session.user.name.clone(),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "Browsing as a guest.",
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(
        Paragraph::new(session_line).alignment(Alignment::Center),
        rows[5],
    );

    let hints = if app.store.is_authenticated() {
        keybind_line(&[("a", "account"), ("q", "quit")])
    } else {
        keybind_line(&[("l", "sign in"), ("s", "create account"), ("q", "quit")])
    };
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[7]);
}
