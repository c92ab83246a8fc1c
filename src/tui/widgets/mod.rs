// ABOUTME: TUI widget sub-modules for the chat list and the hint bar.
// ABOUTME: Each widget is a pure rendering function over WidgetState fields.

pub mod chat;
pub mod hint;
