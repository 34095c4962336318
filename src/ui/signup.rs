//! Account creation screen with inline email verification

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use super::helpers::{
    centered_rect, input_block, input_value_line, keybind_line, mask_secret, render_input,
    spinner_frame,
};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIM, COLOR_ERROR, COLOR_STRENGTH_MEDIUM,
    COLOR_STRENGTH_STRONG, COLOR_STRENGTH_WEAK, COLOR_TEXT, COLOR_VERIFIED,
};
use crate::app::{App, SignupFocus};
use crate::auth::{format_cooldown, password, Field, OtpFlowState, Strength};

pub fn render_signup_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Vastra Villa ",
            Style::default().fg(COLOR_ACCENT),
        ));
    frame.render_widget(outer_block, area);

    let form = &app.signup_form;
    let otp_visible = form.otp_row_visible();

    let mut constraints = vec![
        Constraint::Length(1), // title
        Constraint::Length(1),
        Constraint::Length(3), // first/last name
        Constraint::Length(3), // email
    ];
    if otp_visible {
        constraints.push(Constraint::Length(3)); // otp slots
    }
    constraints.extend([
        Constraint::Length(3), // phone
        Constraint::Length(3), // password
        Constraint::Length(1), // strength meter
        Constraint::Length(1), // form error
        Constraint::Length(1), // submit
        Constraint::Length(1),
        Constraint::Length(1), // hints
    ]);

    let height = if otp_visible { 22 } else { 19 };
    let dialog = centered_rect(58, height, area);
    let rows = Layout::vertical(constraints).split(dialog);
    let offset = usize::from(otp_visible);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Create Your Vastra Villa Account",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );

    let name_cols =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[2]);
    render_input(
        frame,
        name_cols[0],
        "First Name",
        &form.first_name,
        form.focus == SignupFocus::FirstName,
        form.field_error(Field::FirstName),
    );
    render_input(
        frame,
        name_cols[1],
        "Last Name",
        &form.last_name,
        form.focus == SignupFocus::LastName,
        form.field_error(Field::LastName),
    );

    render_email_row(frame, rows[3], app);

    if otp_visible {
        render_otp_row(frame, rows[4], app);
    }

    render_input(
        frame,
        rows[4 + offset],
        "Phone Number",
        &form.phone,
        form.focus == SignupFocus::Phone,
        form.field_error(Field::Phone),
    );

    let password_shown = if form.show_password {
        form.password.clone()
    } else {
        mask_secret(&form.password)
    };
    render_input(
        frame,
        rows[5 + offset],
        "Password",
        &password_shown,
        form.focus == SignupFocus::Password,
        form.field_error(Field::Password),
    );

    if let Some(strength) = password::evaluate(&form.password) {
        frame.render_widget(
            Paragraph::new(strength_line(strength)).alignment(Alignment::Center),
            rows[6 + offset],
        );
    }

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(COLOR_ERROR),
            )))
            .alignment(Alignment::Center),
            rows[7 + offset],
        );
    }

    let submit = if app.submitter.is_in_flight() {
        Line::from(vec![
            Span::styled(
                spinner_frame(app.tick_count),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::raw(" Creating..."),
        ])
    } else {
        keybind_line(&[("Enter", "Create Account")])
    };
    frame.render_widget(Paragraph::new(submit).alignment(Alignment::Center), rows[8 + offset]);

    frame.render_widget(
        Paragraph::new(keybind_line(&[
            ("Tab", "next"),
            ("Ctrl+S", "send code"),
            ("Ctrl+R", "show/hide"),
            ("Esc", "back"),
        ]))
        .alignment(Alignment::Center),
        rows[10 + offset],
    );
}

/// Email input plus the send/resend control in its bottom border.
fn render_email_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.signup_form;
    let focused = form.focus == SignupFocus::Email;
    let error = form.field_error(Field::Email);

    let mut block = input_block("Email Address", focused, error);
    if error.is_none() {
        let control = if form.sending_otp {
            Line::from(vec![
                Span::styled(
                    spinner_frame(app.tick_count),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::raw(" Sending... "),
            ])
        } else if form.otp.cooldown() > 0 {
            Line::from(vec![
                Span::styled(" [Ctrl+S]", Style::default().fg(COLOR_ACCENT)),
                Span::raw(format!(" Resend {} ", format_cooldown(form.otp.cooldown()))),
            ])
        } else {
            Line::from(vec![
                Span::styled(" [Ctrl+S]", Style::default().fg(COLOR_ACCENT)),
                Span::raw(" Send OTP "),
            ])
        };
        block = block.title_bottom(control.right_aligned());
    }

    frame.render_widget(
        Paragraph::new(input_value_line(&form.email, focused, area.width)).block(block),
        area,
    );
}

/// One slot per expected digit, with verify progress and result inline.
fn render_otp_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.signup_form;
    let otp = &form.otp;
    let focused = form.focus == SignupFocus::Otp;

    let border_style = if otp.is_verified() {
        Style::default().fg(COLOR_VERIFIED)
    } else if otp.last_error().is_some() {
        Style::default().fg(COLOR_ERROR)
    } else if focused {
        Style::default().fg(COLOR_BORDER_FOCUS)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let title_style = if focused {
        Style::default()
            .fg(COLOR_BORDER_FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(" One-Time Code ", title_style));
    if let Some(message) = otp.last_error() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(COLOR_ERROR),
        )));
    }

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (idx, slot) in otp.slots().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        if slot.is_empty() {
            let style = if focused && idx == otp.focused() {
                Style::default().fg(COLOR_BORDER_FOCUS)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            spans.push(Span::styled("_", style));
        } else {
            spans.push(Span::styled(
                slot.clone(),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
            ));
        }
    }
    match otp.state() {
        OtpFlowState::Verifying => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                spinner_frame(app.tick_count),
                Style::default().fg(COLOR_ACCENT),
            ));
            spans.push(Span::raw(" Verifying..."));
        }
        OtpFlowState::Verified => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "✓ Verified",
                Style::default().fg(COLOR_VERIFIED),
            ));
        }
        _ => {}
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Three-segment meter plus the strength label, colored by bucket.
fn strength_line(strength: Strength) -> Line<'static> {
    let color = match strength {
        Strength::Weak => COLOR_STRENGTH_WEAK,
        Strength::Medium => COLOR_STRENGTH_MEDIUM,
        Strength::Strong => COLOR_STRENGTH_STRONG,
    };
    let mut spans = Vec::with_capacity(5);
    for idx in 0..3 {
        let style = if idx < strength.segments() {
            Style::default().fg(color)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled("▰", style));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("Password Strength: {}", strength.label()),
        Style::default().fg(color),
    ));
    Line::from(spans)
}
