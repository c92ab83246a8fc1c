// ABOUTME: TUI module — ratatui interface for the popup chat widget.
// ABOUTME: Widget state, input handling, and rendering.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;
