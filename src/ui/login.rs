//! Member login screen

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use super::helpers::{centered_rect, keybind_line, mask_secret, render_input, spinner_frame};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_ERROR, COLOR_SILK, COLOR_TEXT};
use crate::app::{App, LoginFocus};
use crate::auth::IdentifierModes;

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Outer block with double border
    let outer_block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Vastra Villa ",
            Style::default().fg(COLOR_ACCENT),
        ));
    frame.render_widget(outer_block, area);

    let dialog = centered_rect(54, 14, area);
    let rows = Layout::vertical([
        Constraint::Length(1), // kicker
        Constraint::Length(1), // title
        Constraint::Length(1), // subtitle
        Constraint::Length(1),
        Constraint::Length(3), // identifier
        Constraint::Length(3), // password
        Constraint::Length(1), // error
        Constraint::Length(1), // submit
        Constraint::Length(1),
        Constraint::Length(1), // hints
    ])
    .split(dialog);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "MEMBER LOGIN",
            Style::default().fg(COLOR_ACCENT),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Welcome Back",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Use your verified account to continue.",
            Style::default().fg(COLOR_SILK),
        )))
        .alignment(Alignment::Center),
        rows[2],
    );

    let form = &app.login_form;
    let identifier_label = match app.config.identifier_modes {
        IdentifierModes::EmailOnly => "Email Address",
        IdentifierModes::EmailOrPhone => "Email or Phone",
    };
    render_input(
        frame,
        rows[4],
        identifier_label,
        &form.identifier,
        form.focus == LoginFocus::Identifier,
        None,
    );

    let password_shown = if form.show_password {
        form.password.clone()
    } else {
        mask_secret(&form.password)
    };
    render_input(
        frame,
        rows[5],
        "Password",
        &password_shown,
        form.focus == LoginFocus::Password,
        None,
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(COLOR_ERROR),
            )))
            .alignment(Alignment::Center),
            rows[6],
        );
    }

    let submit = if app.submitter.is_in_flight() {
        Line::from(vec![
            Span::styled(
                spinner_frame(app.tick_count),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::raw(" Logging in..."),
        ])
    } else {
        keybind_line(&[("Enter", "Login")])
    };
    frame.render_widget(Paragraph::new(submit).alignment(Alignment::Center), rows[7]);

    frame.render_widget(
        Paragraph::new(keybind_line(&[
            ("Tab", "next"),
            ("Ctrl+R", "show/hide"),
            ("Esc", "back"),
            ("Ctrl+C", "quit"),
        ]))
        .alignment(Alignment::Center),
        rows[9],
    );
}
