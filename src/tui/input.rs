// ABOUTME: Keyboard and mouse input handling — translates terminal events into widget actions.
// ABOUTME: Key routing depends on whether the popup is open or closed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::tui::state::WidgetState;

const MOUSE_SCROLL_STEP: u16 = 3;

/// The result of processing an input event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User submitted a message; the text has already been appended to the chat.
    Send(String),
    /// User toggled the popup open or closed.
    Toggled,
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current widget state and return the resulting action.
pub fn handle_key(state: &mut WidgetState, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // Ctrl+T is the trigger control: toggles in both states.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
        state.toggle_open();
        return InputResult::Toggled;
    }

    if !state.is_open {
        return handle_closed_key(state, key);
    }

    // Scroll keys work regardless of draft contents.
    match key.code {
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            return InputResult::None;
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            return InputResult::None;
        }
        KeyCode::Up => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            return InputResult::None;
        }
        KeyCode::Down => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            return InputResult::None;
        }
        _ => {}
    }

    // Normal input mode.
    match key.code {
        KeyCode::Enter => {
            if let Some(text) = state.send_draft() {
                InputResult::Send(text)
            } else {
                InputResult::None
            }
        }
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        // Esc is the close control while the popup is open.
        KeyCode::Esc => {
            state.toggle_open();
            InputResult::Toggled
        }
        _ => InputResult::None,
    }
}

/// Key handling while the popup is closed: only the trigger and quit keys act.
fn handle_closed_key(state: &mut WidgetState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Enter => {
            state.toggle_open();
            InputResult::Toggled
        }
        KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
        _ => InputResult::None,
    }
}

/// Mouse wheel scrolls the chat while the popup is open.
pub fn handle_mouse(state: &mut WidgetState, mouse: MouseEvent) -> InputResult {
    if !state.is_open {
        return InputResult::None;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(MOUSE_SCROLL_STEP);
        }
        MouseEventKind::ScrollDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(MOUSE_SCROLL_STEP);
        }
        _ => {}
    }
    InputResult::None
}
