//! # Single-line buffer
//!
//! ## Overview
//!
//! A [LineBuffer] holds one line of text and a cursor within it. Positions are counted in
//! `char`s, so the cursor always sits between two codepoints and never inside one.
//!
//! Operations that cannot proceed inside the line (deleting or moving past either end) report
//! [LineEdit::Boundary] so that the [DocumentBuffer](super::document::DocumentBuffer) can carry
//! them over into the neighbouring line.
use std::fmt;

/// The outcome of a line-level edit or movement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum LineEdit {
    /// The operation was carried out within the line.
    Handled,

    /// The cursor is at the line edge, and nothing was changed.
    Boundary,
}

impl LineEdit {
    /// Whether the operation ran into the edge of the line.
    pub fn is_boundary(&self) -> bool {
        matches!(self, LineEdit::Boundary)
    }
}

/// One line of text with an intra-line cursor.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineBuffer {
    content: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    /// Create an empty line.
    pub fn new() -> Self {
        LineBuffer::default()
    }

    /// The contents of this line.
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }

    /// The number of characters in this line.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this line contains no characters.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The cursor offset, in characters from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor, and move the cursor past it.
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn delete_before(&mut self) -> LineEdit {
        if self.cursor == 0 {
            return LineEdit::Boundary;
        }

        self.cursor -= 1;
        self.content.remove(self.cursor);

        return LineEdit::Handled;
    }

    /// Move the cursor one character to the left.
    pub fn move_left(&mut self) -> LineEdit {
        if self.cursor == 0 {
            return LineEdit::Boundary;
        }

        self.cursor -= 1;

        return LineEdit::Handled;
    }

    /// Move the cursor one character to the right.
    pub fn move_right(&mut self) -> LineEdit {
        if self.cursor >= self.content.len() {
            return LineEdit::Boundary;
        }

        self.cursor += 1;

        return LineEdit::Handled;
    }

    /// Place the cursor before the first character.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Place the cursor after the last character.
    pub fn move_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Place the cursor at `pos`, clamped to the length of the line.
    pub fn move_to(&mut self, pos: usize) {
        self.cursor = pos.min(self.content.len());
    }

    /// Split this line at the cursor. See [LineBuffer::split_at].
    pub fn split(&mut self) -> LineBuffer {
        self.split_at(self.cursor)
    }

    /// Split this line at `at`, returning everything after it as a new line.
    ///
    /// This line keeps the prefix, with its cursor moved to the end of it. The returned line has
    /// its cursor at the start.
    pub fn split_at(&mut self, at: usize) -> LineBuffer {
        let at = at.min(self.content.len());
        let content = self.content.split_off(at);

        self.move_to_end();

        LineBuffer { content, cursor: 0 }
    }

    /// Append the contents of `other` to this line, leaving the cursor at the join.
    pub fn merge(&mut self, other: LineBuffer) {
        self.cursor = self.content.len();
        self.content.extend(other.content);
    }

    /// Render the line with `marker` inserted at the cursor position.
    pub fn render_with_cursor(&self, marker: char) -> String {
        let mut res = String::with_capacity(self.content.len() + 1);

        res.extend(&self.content[..self.cursor]);
        res.push(marker);
        res.extend(&self.content[self.cursor..]);

        return res;
    }
}

impl From<&str> for LineBuffer {
    fn from(s: &str) -> Self {
        LineBuffer { content: s.chars().collect(), cursor: 0 }
    }
}

impl From<String> for LineBuffer {
    fn from(s: String) -> Self {
        LineBuffer::from(s.as_str())
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.content.iter() {
            fmt::Write::write_char(f, *c)?;
        }

        Ok(())
    }
}
