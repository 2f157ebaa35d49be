//! Command-line input buffer with cursor management and recall history.

use std::collections::VecDeque;

use ratatui::text::Span;

const HISTORY_LIMIT: usize = 100;

/// A single-line text buffer. The cursor is a byte offset that always sits
/// on a char boundary.
#[derive(Debug, Default)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
    /// Most recent submission first.
    history: VecDeque<String>,
    history_index: Option<usize>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.next_boundary();
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Take the line out for submission, recording it in the history.
    pub fn submit(&mut self) -> String {
        let line = std::mem::take(&mut self.content);
        self.cursor = 0;
        self.history_index = None;
        if !line.trim().is_empty() {
            self.history.push_front(line.clone());
            self.history.truncate(HISTORY_LIMIT);
        }
        line
    }

    /// Step back through submitted lines.
    pub fn history_prev(&mut self) {
        let next = match self.history_index {
            None => 0,
            Some(i) => (i + 1).min(self.history.len().saturating_sub(1)),
        };
        if let Some(entry) = self.history.get(next) {
            self.content = entry.clone();
            self.cursor = self.content.len();
            self.history_index = Some(next);
        }
    }

    /// Step forward; past the newest entry the line is cleared.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.clear();
            }
            Some(i) => {
                if let Some(entry) = self.history.get(i - 1) {
                    self.content = entry.clone();
                    self.cursor = self.content.len();
                    self.history_index = Some(i - 1);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    /// Terminal columns taken by the text before the cursor. Differs from
    /// [`cursor_column`](Self::cursor_column) once wide glyphs are typed.
    pub fn cursor_width(&self) -> usize {
        Span::raw(&self.content[..self.cursor]).width()
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.content.len())
    }
}
