// ABOUTME: Widget state — open flag, chat messages, draft input buffer, and scroll position.
// ABOUTME: All widget mutations flow through here; the event loop and tests drive the same methods.

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

/// A single message in the chat history. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

/// Events sent from the responder task to the UI via an mpsc channel.
#[derive(Debug, PartialEq)]
pub enum AgentEvent {
    /// A delayed reply is ready to be appended to the chat.
    Reply(String),
}

/// Events sent from the UI to the responder task.
#[derive(Debug, PartialEq)]
pub enum UserEvent {
    /// User sent a chat message.
    Message(String),
    /// Shut the responder down, aborting replies still waiting on their delay.
    Quit,
}

/// Full widget state: one instance per app, mutated only by the event loop.
pub struct WidgetState {
    /// Whether the popup is open. Starts closed; toggling is symmetric and unlimited.
    pub is_open: bool,
    /// Chat history, oldest first. Never contains whitespace-only text.
    pub messages: Vec<Message>,
    /// Draft input buffer.
    pub input: String,
    /// Cursor position in the draft, counted in characters.
    pub cursor_pos: usize,
    /// Lines scrolled up from the bottom of the chat (0 = pinned to newest).
    pub scroll_offset: u16,
    /// Replies scheduled but not yet arrived; drives the "replying..." indicator.
    pub pending_replies: usize,
    /// Popup title from config.
    pub title: String,
}

impl WidgetState {
    /// Create a closed, empty widget with the given title.
    pub fn new(title: String) -> Self {
        Self {
            is_open: false,
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            pending_replies: 0,
            title,
        }
    }

    /// Flip the open flag. No other state is touched.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Append a message and reset scroll to the bottom (auto-scroll).
    /// Whitespace-only text is dropped so the history invariant holds.
    pub fn push_message(&mut self, sender: Sender, text: String) {
        if text.trim().is_empty() {
            return;
        }
        self.messages.push(Message { sender, text });
        self.scroll_offset = 0;
    }

    /// Submit the draft: trim, append as a User message, clear the draft, and
    /// count one pending reply. Returns the text to forward to the responder,
    /// or None if the draft was empty/whitespace (silent no-op, not an error).
    pub fn send_draft(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.input.clear();
        self.cursor_pos = 0;
        self.push_message(Sender::User, trimmed.clone());
        self.pending_replies += 1;
        Some(trimmed)
    }

    /// Apply an event from the responder task.
    pub fn apply_agent_event(&mut self, event: AgentEvent) {
        match event {
            AgentEvent::Reply(text) => {
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.push_message(Sender::Agent, text);
            }
        }
    }

    /// Pull the cursor back into range if the draft shrank underneath it.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Byte offset of the cursor in the draft. Character positions are the
    /// public unit; bytes only matter for the String edits below.
    pub fn cursor_byte_index(&self) -> usize {
        byte_offset_of_char(&self.input, self.cursor_pos)
    }

    /// Draft length in characters.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and step past it.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Backspace: remove the character left of the cursor.
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = byte_offset_of_char(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete: remove the character under the cursor.
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = byte_offset_of_char(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }
}

/// Byte offset where the `char_index`-th character starts; end of string when
/// the index is past the last character.
fn byte_offset_of_char(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
