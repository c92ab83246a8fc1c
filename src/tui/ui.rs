// ABOUTME: Main rendering function — draws the closed trigger or the open popup overlay.
// ABOUTME: The popup is anchored bottom-right and splits into chat, input, and hint areas.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::WidgetState;
use crate::tui::widgets::chat::render_chat_lines;
use crate::tui::widgets::hint::hint_line;

/// Maximum popup size in terminal cells; shrinks to fit small terminals.
const POPUP_WIDTH: u16 = 46;
const POPUP_HEIGHT: u16 = 18;

const TRIGGER_LABEL: &str = " 💬 chat ";

/// Render the full screen: header, then either the trigger or the popup.
pub fn render(frame: &mut Frame, state: &mut WidgetState) {
    let area = frame.area();

    // Header
    let header = Line::from(Span::styled(
        " popchat",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), area);

    if state.is_open {
        render_popup(frame, state, popup_rect(area));
    } else {
        render_trigger(frame, area);
    }
}

/// Bottom-right anchored popup rect with a one-cell margin where it fits.
pub fn popup_rect(area: Rect) -> Rect {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let x = area
        .right()
        .saturating_sub(width.saturating_add(1))
        .max(area.x);
    let y = area
        .bottom()
        .saturating_sub(height.saturating_add(1))
        .max(area.y);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// The closed state shows only the trigger control in the bottom-right corner.
fn render_trigger(frame: &mut Frame, area: Rect) {
    let label_width = UnicodeWidthStr::width(TRIGGER_LABEL) as u16;
    let trigger = Rect {
        x: area.right().saturating_sub(label_width + 1).max(area.x),
        y: area.bottom().saturating_sub(2).max(area.y),
        width: label_width.min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            TRIGGER_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        trigger,
    );

    let hint = Line::from(Span::styled(
        " Enter open · q quit ",
        Style::default().fg(Color::DarkGray),
    ));
    let hint_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1).max(area.y),
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(hint), hint_area);
}

/// The open popup: bordered card with chat area, input box, and hint line.
fn render_popup(frame: &mut Frame, state: &mut WidgetState, popup: Rect) {
    frame.render_widget(Clear, popup);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", state.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = card.inner(popup);
    frame.render_widget(card, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Chat area
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Hint line
        ])
        .split(inner);

    // Chat area. scroll_offset counts lines up from the bottom, so 0 keeps the
    // view pinned to the newest message. line_count() gives the post-wrap
    // height as ratatui will actually render it, which is what the offset must
    // be measured against.
    let chat_chunk = chunks[0];
    let chat_paragraph = Paragraph::new(render_chat_lines(&state.messages)).wrap(Wrap { trim: false });
    let total_lines = chat_paragraph.line_count(chat_chunk.width) as u16;
    let max_scroll = total_lines.saturating_sub(chat_chunk.height);

    // An offset past the top of the content sticks at the top.
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    let scroll = max_scroll.saturating_sub(state.scroll_offset);
    frame.render_widget(chat_paragraph.scroll((scroll, 0)), chat_chunk);

    // Input box
    let input_chunk = chunks[1];
    let input_block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let input = Paragraph::new(state.input.clone()).block(input_block);
    frame.render_widget(input, input_chunk);

    // Place the terminal cursor in the input box: measure the draft up to the
    // cursor by display width (wide glyphs count double), then pin the result
    // to the box so a long draft can't push the cursor outside the popup.
    if input_chunk.width > 0 && input_chunk.height > 1 {
        state.clamp_cursor();
        let prefix: String = state.input.chars().take(state.cursor_pos).collect();
        let visual_col = UnicodeWidthStr::width(prefix.as_str());
        let max_visual_col = input_chunk.width.saturating_sub(1) as usize;
        let cursor_x = input_chunk
            .x
            .saturating_add(visual_col.min(max_visual_col) as u16);
        // Row 0 of the chunk is the block's top border.
        let cursor_y = input_chunk.y.saturating_add(1);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    // Hint line
    frame.render_widget(
        Paragraph::new(hint_line(state.messages.len(), state.pending_replies)),
        chunks[2],
    );
}
