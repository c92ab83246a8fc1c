// ABOUTME: Chat widget — renders the message list into styled ratatui Lines.
// ABOUTME: User and agent messages get distinct prefixes and colors.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::{Message, Sender};

/// Render a slice of chat messages into styled Lines for display.
pub fn render_chat_lines(messages: &[Message]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, msg) in messages.iter().enumerate() {
        // Blank separator line between messages.
        if idx > 0 {
            lines.push(Line::from(""));
        }

        match msg.sender {
            Sender::User => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "❯ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(msg.text.clone()),
                ]));
            }
            Sender::Agent => {
                // First line gets the prefix, subsequent lines are plain.
                for (i, text) in msg.text.split('\n').enumerate() {
                    if i == 0 {
                        lines.push(Line::from(vec![
                            Span::styled(
                                "⏺ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(text.to_string()),
                        ]));
                    } else {
                        lines.push(Line::from(Span::raw(text.to_string())));
                    }
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_green_prefix() {
        let messages = vec![Message {
            sender: Sender::User,
            text: "hello".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert!(spans.len() >= 2);
        assert_eq!(spans[0].content, "❯ ");
        assert_eq!(spans[0].style.fg, Some(Color::Green));
        assert_eq!(spans[1].content, "hello");
    }

    #[test]
    fn agent_message_has_cyan_prefix() {
        let messages = vec![Message {
            sender: Sender::Agent,
            text: "This is a sample response from AI.".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "⏺ ");
        assert_eq!(spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn multiline_agent_message_renders_one_line_each() {
        let messages = vec![Message {
            sender: Sender::Agent,
            text: "line1\nline2\nline3".to_string(),
        }];
        let lines = render_chat_lines(&messages);
        assert_eq!(lines.len(), 3);
        // Only the first line carries the prefix.
        assert_eq!(lines[0].spans[0].content, "⏺ ");
        assert_eq!(lines[1].spans[0].content, "line2");
    }

    #[test]
    fn blank_separator_between_messages() {
        let messages = vec![
            Message {
                sender: Sender::User,
                text: "hi".to_string(),
            },
            Message {
                sender: Sender::Agent,
                text: "hello".to_string(),
            },
        ];
        let lines = render_chat_lines(&messages);
        // user line, blank separator, agent line
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans.len(), 0);
    }

    #[test]
    fn empty_history_renders_no_lines() {
        let lines = render_chat_lines(&[]);
        assert!(lines.is_empty());
    }

    #[test]
    fn display_order_matches_insertion_order() {
        let messages = vec![
            Message {
                sender: Sender::User,
                text: "first".to_string(),
            },
            Message {
                sender: Sender::User,
                text: "second".to_string(),
            },
        ];
        let lines = render_chat_lines(&messages);
        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        let first = flat.find("first").unwrap();
        let second = flat.find("second").unwrap();
        assert!(first < second);
    }
}
