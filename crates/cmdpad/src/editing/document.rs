//! # Multi-line document buffer
//!
//! ## Overview
//!
//! A [DocumentBuffer] is an ordered list of [LineBuffer] values and the index of the line that
//! currently receives edits. It composes the single-line primitives into multi-line behaviour:
//! Enter splits the active line, Backspace at the start of a line joins it onto the previous one,
//! and horizontal movement wraps across line edges.
//!
//! There is always at least one line, and the active index always points at one of them.
use super::line::LineBuffer;
use crate::util::is_newline;

/// An ordered sequence of lines with one active line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentBuffer {
    lines: Vec<LineBuffer>,
    active: usize,
}

impl Default for DocumentBuffer {
    fn default() -> Self {
        DocumentBuffer { lines: vec![LineBuffer::new()], active: 0 }
    }
}

impl DocumentBuffer {
    /// Create a document containing a single empty line.
    pub fn new() -> Self {
        DocumentBuffer::default()
    }

    /// All lines in this document.
    pub fn lines(&self) -> &[LineBuffer] {
        &self.lines
    }

    /// Get the line at `idx`, if it exists.
    pub fn line(&self, idx: usize) -> Option<&LineBuffer> {
        self.lines.get(idx)
    }

    /// The number of lines in this document. Never zero.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The index of the active line.
    pub fn active_line(&self) -> usize {
        self.active
    }

    /// The cursor column within the active line.
    pub fn cursor(&self) -> usize {
        self.current().cursor()
    }

    fn current(&self) -> &LineBuffer {
        &self.lines[self.active]
    }

    fn current_mut(&mut self) -> &mut LineBuffer {
        &mut self.lines[self.active]
    }

    /// Insert a character at the cursor.
    pub fn add(&mut self, c: char) {
        self.current_mut().insert(c);
    }

    /// Delete the character before the cursor.
    ///
    /// At the start of a line, the line gets joined onto the end of the previous one. At the
    /// start of the document, this does nothing.
    pub fn remove(&mut self) {
        if !self.current_mut().delete_before().is_boundary() {
            return;
        }

        if self.active == 0 {
            return;
        }

        let line = self.lines.remove(self.active);
        self.active -= 1;
        self.current_mut().merge(line);
    }

    /// Move the cursor left, wrapping onto the end of the previous line.
    pub fn move_left(&mut self) {
        if !self.current_mut().move_left().is_boundary() {
            return;
        }

        if self.active == 0 {
            return;
        }

        self.active -= 1;
        self.current_mut().move_to_end();
    }

    /// Move the cursor right, wrapping onto the start of the next line.
    pub fn move_right(&mut self) {
        if !self.current_mut().move_right().is_boundary() {
            return;
        }

        if self.active + 1 >= self.lines.len() {
            return;
        }

        self.active += 1;
        self.current_mut().move_to_start();
    }

    /// Move the cursor to the previous line, keeping its column where possible.
    pub fn move_up(&mut self) {
        if let Some(target) = self.active.checked_sub(1) {
            self.move_vertical(target);
        }
    }

    /// Move the cursor to the next line, keeping its column where possible.
    pub fn move_down(&mut self) {
        self.move_vertical(self.active + 1);
    }

    fn move_vertical(&mut self, target: usize) {
        if target >= self.lines.len() {
            return;
        }

        let column = self.cursor();
        self.lines[target].move_to(column);
        self.active = target;
    }

    /// Break the active line at the cursor, and move onto the new line.
    pub fn split(&mut self) {
        let next = self.current_mut().split();

        self.active += 1;
        self.lines.insert(self.active, next);
    }

    /// Insert a run of text at the cursor, starting a new line at each line break.
    ///
    /// Both `"\n"` and `"\r\n"` count as a single line break, as does a lone `'\r'`.
    pub fn insert_text(&mut self, text: &str) {
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if !is_newline(c) {
                self.add(c);
                continue;
            }

            if c == '\r' && chars.peek() == Some(&'\n') {
                let _ = chars.next();
            }

            self.split();
        }
    }

    /// Replace the whole document with `content`, placing the cursor at the very end.
    pub fn reset(&mut self, content: &str) {
        self.lines = content
            .split('\n')
            .map(|s| {
                let mut line = LineBuffer::from(s);
                line.move_to_end();
                line
            })
            .collect();

        self.active = self.lines.len() - 1;
    }

    /// Replace the whole document with a single empty line.
    pub fn clear(&mut self) {
        self.lines = vec![LineBuffer::new()];
        self.active = 0;
    }

    /// The raw text of this document, with lines joined by `"\n"`.
    pub fn flatten(&self) -> String {
        let mut res = String::new();

        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                res.push('\n');
            }

            res.push_str(&line.text());
        }

        return res;
    }

    /// Render the document for display, with `marker` at the cursor position.
    ///
    /// Every line, including the last, is terminated by `"\n"`.
    pub fn render_with_cursor(&self, marker: char) -> String {
        let mut res = String::new();

        for (i, line) in self.lines.iter().enumerate() {
            if i == self.active {
                res.push_str(&line.render_with_cursor(marker));
            } else {
                res.push_str(&line.text());
            }

            res.push('\n');
        }

        return res;
    }
}

impl From<&str> for DocumentBuffer {
    fn from(content: &str) -> Self {
        let mut doc = DocumentBuffer::new();
        doc.reset(content);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    fn texts(doc: &DocumentBuffer) -> Vec<String> {
        doc.lines().iter().map(LineBuffer::text).collect()
    }

    fn home(doc: &mut DocumentBuffer) {
        doc.current_mut().move_to_start();
    }

    fn assert_invariants(doc: &DocumentBuffer) {
        assert!(doc.line_count() >= 1);
        assert!(doc.active_line() < doc.line_count());
        assert!(doc.cursor() <= doc.lines()[doc.active_line()].len());
    }

    #[test]
    fn test_new() {
        let doc = DocumentBuffer::new();

        assert_eq!(texts(&doc), vec![""]);
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 0);
        assert_eq!(doc.flatten(), "");
        assert_eq!(doc.render_with_cursor('|'), "|\n");
    }

    #[test]
    fn test_add_and_split() {
        let mut doc = DocumentBuffer::new();

        doc.add('a');
        doc.add('b');
        doc.split();
        doc.add('c');

        assert_eq!(texts(&doc), vec!["ab", "c"]);
        assert_eq!(doc.active_line(), 1);
        assert_eq!(doc.cursor(), 1);
        assert_eq!(doc.flatten(), "ab\nc");
        assert_eq!(doc.render_with_cursor('|'), "ab\nc|\n");

        // Split in the middle of the first line.
        doc.move_up();
        assert_eq!(doc.cursor(), 1);
        doc.split();
        assert_eq!(texts(&doc), vec!["a", "b", "c"]);
        assert_eq!(doc.active_line(), 1);
        assert_eq!(doc.cursor(), 0);
        assert_eq!(doc.render_with_cursor('|'), "a\n|b\nc\n");
    }

    #[test]
    fn test_remove_merges_lines() {
        let mut doc = DocumentBuffer::from("foo\nbar");
        home(&mut doc);

        doc.remove();
        assert_eq!(texts(&doc), vec!["foobar"]);
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 3);

        doc.remove();
        assert_eq!(texts(&doc), vec!["fobar"]);
        assert_eq!(doc.cursor(), 2);
    }

    #[test]
    fn test_remove_at_document_start() {
        let mut doc = DocumentBuffer::from("abc");
        doc.move_up();
        for _ in 0..3 {
            doc.move_left();
        }

        assert_eq!(doc.cursor(), 0);
        doc.remove();
        assert_eq!(doc.flatten(), "abc");
        assert_eq!(doc.cursor(), 0);

        let mut doc = DocumentBuffer::new();
        doc.remove();
        assert_eq!(texts(&doc), vec![""]);
    }

    #[test]
    fn test_move_left_right_wraps() {
        let mut doc = DocumentBuffer::from("ab\ncd");
        home(&mut doc);

        // Wrap back onto the end of the first line.
        doc.move_left();
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 2);

        // And forward onto the start of the second.
        doc.move_right();
        assert_eq!(doc.active_line(), 1);
        assert_eq!(doc.cursor(), 0);

        // Nothing past the end of the document.
        doc.move_right();
        doc.move_right();
        doc.move_right();
        assert_eq!(doc.active_line(), 1);
        assert_eq!(doc.cursor(), 2);

        // Nothing before the start of it either.
        for _ in 0..10 {
            doc.move_left();
        }
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 0);
    }

    #[test]
    fn test_move_up_down_column() {
        let mut doc = DocumentBuffer::from("hello\nhi\nworld");
        assert_eq!(doc.cursor(), 5);

        // Moving onto a shorter line clamps the column.
        doc.move_up();
        assert_eq!(doc.active_line(), 1);
        assert_eq!(doc.cursor(), 2);

        doc.move_up();
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 2);

        // No line above the first.
        doc.move_up();
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 2);

        doc.move_right();
        doc.move_right();
        doc.move_down();
        doc.move_down();
        assert_eq!(doc.active_line(), 2);
        assert_eq!(doc.cursor(), 2);

        // No line below the last.
        doc.move_down();
        assert_eq!(doc.active_line(), 2);

        // Round trips through long enough lines keep the column.
        let mut doc = DocumentBuffer::from("abcd\nefgh\nijkl");
        doc.move_up();
        doc.move_left();
        assert_eq!(doc.cursor(), 3);
        doc.move_up();
        doc.move_down();
        assert_eq!((doc.active_line(), doc.cursor()), (1, 3));
        doc.move_down();
        doc.move_up();
        assert_eq!((doc.active_line(), doc.cursor()), (1, 3));
    }

    #[test]
    fn test_reset() {
        let mut doc = DocumentBuffer::new();
        doc.reset("a\nb\nc");

        assert_eq!(texts(&doc), vec!["a", "b", "c"]);
        assert_eq!(doc.active_line(), 2);
        assert_eq!(doc.cursor(), 1);
        assert_eq!(doc.render_with_cursor('|'), "a\nb\nc|\n");

        // Every line has its cursor left at its own end.
        doc.move_up();
        assert_eq!(doc.cursor(), 1);

        // Trailing newlines produce a trailing empty line.
        doc.reset("x\n");
        assert_eq!(texts(&doc), vec!["x", ""]);
        assert_eq!(doc.active_line(), 1);
        assert_eq!(doc.cursor(), 0);

        doc.reset("");
        assert_eq!(texts(&doc), vec![""]);
        assert_eq!(doc.active_line(), 0);
    }

    #[test]
    fn test_reset_flatten_identity() {
        let inputs = ["", "plain", "a\nb", "\n\n", "trailing\n", "ünï\ncödé\n字"];

        for s in inputs {
            assert_eq!(DocumentBuffer::from(s).flatten(), s);
        }
    }

    #[test]
    fn test_clear() {
        let mut doc = DocumentBuffer::from("one\ntwo\nthree");
        doc.move_up();
        doc.clear();

        assert_eq!(doc.flatten(), "");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.active_line(), 0);
        assert_eq!(doc.cursor(), 0);
    }

    #[test]
    fn test_insert_text() {
        let mut doc = DocumentBuffer::from("head tail");
        for _ in 0..4 {
            doc.move_left();
        }

        doc.insert_text("one\r\ntwo\rthree\n");
        assert_eq!(texts(&doc), vec!["head one", "two", "three", "tail"]);
        assert_eq!(doc.active_line(), 3);
        assert_eq!(doc.cursor(), 0);
    }

    #[test]
    fn test_split_then_remove() {
        let mut doc = DocumentBuffer::from("first\nsecond line");
        for _ in 0..4 {
            doc.move_left();
        }
        let before = doc.clone();

        doc.split();
        assert_eq!(texts(&doc), vec!["first", "second ", "line"]);

        doc.remove();
        assert_eq!(doc.flatten(), before.flatten());
        assert_eq!(doc.active_line(), before.active_line());
        assert_eq!(doc.cursor(), before.cursor());
    }

    #[test]
    fn test_add_remove_inverse_random() {
        let mut rng = rand::thread_rng();
        let alphabet = ['a', 'b', 'z', ' ', 'é', '字'];

        for _ in 0..100 {
            let mut doc = DocumentBuffer::new();

            // Build up a random document with a random cursor position.
            for _ in 0..rng.gen_range(0..40) {
                match rng.gen_range(0..10) {
                    0 => doc.split(),
                    1 => doc.remove(),
                    2 => doc.move_left(),
                    3 => doc.move_right(),
                    4 => doc.move_up(),
                    5 => doc.move_down(),
                    _ => doc.add(alphabet[rng.gen_range(0..alphabet.len())]),
                }

                assert_invariants(&doc);
            }

            let text = doc.flatten();
            let (line, col) = (doc.active_line(), doc.cursor());

            doc.add(alphabet[rng.gen_range(0..alphabet.len())]);
            doc.remove();

            assert_eq!(doc.flatten(), text);
            assert_eq!((doc.active_line(), doc.cursor()), (line, col));

            doc.split();
            doc.remove();

            assert_eq!(doc.flatten(), text);
            assert_eq!((doc.active_line(), doc.cursor()), (line, col));
        }
    }
}
