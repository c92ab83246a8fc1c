// ABOUTME: Hint bar widget — message count, pending-reply indicator, and key hints.
// ABOUTME: Displayed as the bottom line inside the open popup.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Render the hint line shown under the input box.
pub fn hint_line(message_count: usize, pending_replies: usize) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(
            format!(" {} ", format_message_count(message_count)),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", dim),
    ];

    if pending_replies > 0 {
        spans.push(Span::styled(
            "replying... ",
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled("| ", dim));
    }

    spans.push(Span::styled("Enter send · Esc close ", dim));

    Line::from(spans)
}

/// Format a message count for display with correct pluralization.
pub fn format_message_count(count: usize) -> String {
    if count == 1 {
        "1 message".to_string()
    } else {
        format!("{} messages", count)
    }
}
