// ABOUTME: E2E tests for widget rendering using ratatui's TestBackend.
// ABOUTME: Verifies the trigger, popup card, message list, auto-scroll, and cursor placement.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use popchat::tui::state::{Sender, WidgetState};
use popchat::tui::ui;

/// Extract a single row of text from the terminal buffer as a String.
fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buf = terminal.backend().buffer();
    let width = buf.area.width;
    (0..width)
        .map(|x| {
            buf.cell((x, y))
                .map(|c| c.symbol().chars().next().unwrap_or(' '))
                .unwrap_or(' ')
        })
        .collect()
}

/// Extract all text from the terminal buffer as a single string (rows joined by newlines).
fn all_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let height = buf.area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A closed widget renders the header and the trigger control, but no
/// message text and no popup title.
#[test]
fn closed_state_shows_trigger_only() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.push_message(Sender::User, "secret history".to_string());

    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();

    let text = all_text(&terminal);
    assert!(
        text.contains("popchat"),
        "header should contain 'popchat', got:\n{}",
        text,
    );
    assert!(
        text.contains("chat"),
        "trigger control should be visible, got:\n{}",
        text,
    );
    assert!(
        !text.contains("secret history"),
        "closed widget must not render messages, got:\n{}",
        text,
    );
    assert!(
        !text.contains("Chatbot"),
        "closed widget must not render the popup title, got:\n{}",
        text,
    );
}

/// Opening the widget renders the titled card and the messages with their
/// sender prefixes, confirming the full render pipeline end-to-end.
#[test]
fn open_state_renders_title_and_messages() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.toggle_open();
    state.push_message(Sender::User, "Hello there".to_string());
    state.push_message(
        Sender::Agent,
        "This is a sample response from AI.".to_string(),
    );

    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();

    let text = all_text(&terminal);
    assert!(text.contains("Chatbot"), "popup title missing:\n{}", text);
    assert!(text.contains("❯"), "user prefix missing:\n{}", text);
    assert!(text.contains("Hello there"), "user text missing:\n{}", text);
    assert!(
        text.contains("sample response"),
        "agent reply missing:\n{}",
        text,
    );
}

/// The hint line reflects the message count and the pending-reply indicator.
#[test]
fn hint_line_shows_pending_reply_indicator() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.toggle_open();
    state.input = "Hi".to_string();
    state.send_draft();

    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();

    let text = all_text(&terminal);
    assert!(text.contains("1 message"), "message count missing:\n{}", text);
    assert!(text.contains("replying"), "pending indicator missing:\n{}", text);
}

/// With scroll_offset at 0 (auto-scroll), appends keep the viewport pinned
/// to the newest content at the bottom of the popup's chat area.
#[test]
fn auto_scroll_stays_pinned_to_newest_message() {
    let backend = TestBackend::new(60, 16);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.toggle_open();
    for i in 0..30 {
        state.push_message(Sender::User, format!("message number {i}"));
    }

    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();

    let text = all_text(&terminal);
    assert!(
        text.contains("message number 29"),
        "newest message should be visible, got:\n{}",
        text,
    );
    assert!(
        !text.contains("message number 0 "),
        "oldest message should have scrolled away, got:\n{}",
        text,
    );
}

/// A scroll offset far past the top clamps against the wrapped content height
/// instead of rendering blank space.
#[test]
fn scroll_offset_clamps_to_content_height() {
    let backend = TestBackend::new(60, 16);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.toggle_open();
    for i in 0..30 {
        state.push_message(Sender::User, format!("message number {i}"));
    }
    state.scroll_offset = 500;

    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();

    assert!(
        state.scroll_offset < 500,
        "scroll offset should have been clamped, got {}",
        state.scroll_offset,
    );
    let text = all_text(&terminal);
    assert!(
        text.contains("message number 0"),
        "clamped view should show the oldest content, got:\n{}",
        text,
    );
}

/// Cursor stays inside the input box when the draft exceeds its width.
#[test]
fn cursor_is_clamped_inside_input_box_for_long_drafts() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.toggle_open();
    state.input = "abcdefghijklmnopqrstuvwxyz".repeat(4);
    state.cursor_pos = state.input.chars().count();

    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();

    let popup = ui::popup_rect(ratatui::layout::Rect::new(0, 0, 80, 24));
    let cursor = terminal.get_cursor_position().unwrap();
    assert!(
        cursor.x < popup.right(),
        "cursor x should stay within the popup, got {:?}",
        cursor,
    );
}

/// Rendering must not panic on tiny terminals, open or closed.
#[test]
fn tiny_terminal_does_not_panic() {
    for (w, h) in [(10u16, 4u16), (4, 2), (1, 1)] {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = WidgetState::new("Chatbot".to_string());
        terminal
            .draw(|frame| ui::render(frame, &mut state))
            .unwrap();

        state.toggle_open();
        state.push_message(Sender::User, "hello".to_string());
        terminal
            .draw(|frame| ui::render(frame, &mut state))
            .unwrap();
    }
}

/// Toggling closed and back open preserves the rendered history.
#[test]
fn reopening_preserves_messages() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut state = WidgetState::new("Chatbot".to_string());
    state.toggle_open();
    state.push_message(Sender::User, "remember me".to_string());

    state.toggle_open(); // close
    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();
    assert!(!all_text(&terminal).contains("remember me"));

    state.toggle_open(); // reopen
    terminal
        .draw(|frame| ui::render(frame, &mut state))
        .unwrap();
    assert!(all_text(&terminal).contains("remember me"));
}
