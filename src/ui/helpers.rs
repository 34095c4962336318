//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for layout, masking, truncation, and the
//! shared form field chrome.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};
use unicode_width::UnicodeWidthChar;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIM, COLOR_ERROR};

/// Spinner frames for in-flight request animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Pick the spinner frame for the current tick (roughly 10 fps at a 16ms tick)
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count / 6) as usize % SPINNER_FRAMES.len()]
}

/// Center a fixed-size rect inside `area`, clamping to its bounds
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Mask a secret with one bullet per character
pub fn mask_secret(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Truncate a string to `max_width` display columns, appending `…` if cut.
/// Width-aware so wide characters do not overflow the field.
pub fn truncate_to_width(value: &str, max_width: usize) -> String {
    let total: usize = value.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return value.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut end = 0;
    for (idx, ch) in value.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        end = idx + ch.len_utf8();
    }
    let mut out = value[..end].to_string();
    out.push('…');
    out
}

/// Keep the tail of `value` that fits in `max_width` display columns.
/// Inputs scroll left as the user types, so the end stays visible.
pub fn tail_to_width(value: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        used += ch_width;
        start = idx;
    }
    &value[start..]
}

/// Bordered block for a form input.
///
/// The focused field gets the rose gold focus ring; a field with a
/// validation error shows the message in its bottom border.
pub fn input_block<'a>(label: &str, focused: bool, error: Option<&str>) -> Block<'a> {
    let border_style = if error.is_some() {
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
        .title(Span::styled(format!(" {label} "), title_style));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(COLOR_ERROR),
        )));
    }
    block
}

/// Value line for a single-line input, scrolled to the tail so the end
/// stays visible, with a cursor bar when focused.
pub fn input_value_line(value: &str, focused: bool, area_width: u16) -> Line<'static> {
    let budget = area_width.saturating_sub(3) as usize;
    let mut spans = vec![Span::styled(
        tail_to_width(value, budget).to_string(),
        Style::default().fg(super::theme::COLOR_TEXT),
    )];
    if focused {
        spans.push(Span::styled(
            "▏".to_string(),
            Style::default().fg(COLOR_BORDER_FOCUS),
        ));
    }
    Line::from(spans)
}

/// Render a single-line text input inside its bordered block.
pub fn render_input(
    frame: &mut ratatui::Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) {
    let block = input_block(label, focused, error);
    frame.render_widget(
        ratatui::widgets::Paragraph::new(input_value_line(value, focused, area.width)).block(block),
        area,
    );
}

/// Footer hint line of `[key] label` pairs separated by pipes
pub fn keybind_line(bindings: &[(&str, &str)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(bindings.len() * 3);
    for (idx, (key, label)) in bindings.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ".to_string(), Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(COLOR_ACCENT),
        ));
        spans.push(Span::raw(format!(" {label}")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frame_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(6), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(60), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_centered_rect_centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        let dialog = centered_rect(40, 10, area);
        assert_eq!(dialog, Rect::new(20, 7, 40, 10));

        let clamped = centered_rect(200, 50, area);
        assert_eq!(clamped, area);
    }

    #[test]
    fn test_mask_secret_counts_chars() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("hunter2"), "•••••••");
        assert_eq!(mask_secret("pässwörd"), "••••••••");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly-10", 10), "exactly-10");
        assert_eq!(truncate_to_width("a-longer-value", 10), "a-longer-…");
    }

    #[test]
    fn test_tail_to_width_keeps_end() {
        assert_eq!(tail_to_width("short", 10), "short");
        assert_eq!(tail_to_width("priya.sharma@vastra.test", 11), "vastra.test");
    }

    #[test]
    fn test_keybind_line_pairs_keys_with_labels() {
        let line = keybind_line(&[("l", "sign in"), ("q", "quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[l] sign in | [q] quit");
    }
}
