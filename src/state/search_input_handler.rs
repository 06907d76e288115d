//! Search field editing (pure state transitions).
//!
//! The cursor is a character index, not a byte offset, so multi-byte input
//! never splits a code point. All functions are pure and testable without a
//! terminal.

/// Text of the search field plus the cursor position within it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBuffer {
    /// Query text.
    pub text: String,
    /// Character index in `0..=text.chars().count()`.
    pub cursor: usize,
}

impl InputBuffer {
    /// Buffer with the cursor clamped to the text length.
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }

    /// Buffer with the cursor placed after the last character.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(mut buf: InputBuffer, ch: char) -> InputBuffer {
    let at = buf.byte_offset(buf.cursor);
    buf.text.insert(at, ch);
    buf.cursor += 1;
    buf
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut buf: InputBuffer) -> InputBuffer {
    if buf.cursor > 0 {
        let at = buf.byte_offset(buf.cursor - 1);
        buf.text.remove(at);
        buf.cursor -= 1;
    }
    buf
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut buf: InputBuffer) -> InputBuffer {
    if buf.cursor < buf.text.chars().count() {
        let at = buf.byte_offset(buf.cursor);
        buf.text.remove(at);
    }
    buf
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut buf: InputBuffer) -> InputBuffer {
    buf.cursor = buf.cursor.saturating_sub(1);
    buf
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(mut buf: InputBuffer) -> InputBuffer {
    buf.cursor = (buf.cursor + 1).min(buf.text.chars().count());
    buf
}

/// Move the cursor to the start.
pub fn handle_home(mut buf: InputBuffer) -> InputBuffer {
    buf.cursor = 0;
    buf
}

/// Move the cursor past the last character.
pub fn handle_end(mut buf: InputBuffer) -> InputBuffer {
    buf.cursor = buf.text.chars().count();
    buf
}

/// Delete from the cursor back to the start of the previous word (Ctrl+W).
pub fn handle_delete_word(mut buf: InputBuffer) -> InputBuffer {
    let chars: Vec<char> = buf.text.chars().collect();
    let mut start = buf.cursor;
    while start > 0 && chars[start - 1].is_whitespace() {
        start -= 1;
    }
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    let from = buf.byte_offset(start);
    let to = buf.byte_offset(buf.cursor);
    buf.text.replace_range(from..to, "");
    buf.cursor = start;
    buf
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
