//! # Editor configuration
//!
//! ## Overview
//!
//! [EditorConfig] holds the few knobs that affect how an
//! [EditorController](crate::controller::EditorController) edits and renders its buffer. Values
//! are set with builder-style methods on top of the defaults:
//!
//! ```
//! use cmdpad::config::EditorConfig;
//!
//! let config = EditorConfig::default().cursor_marker('▏').tab_width(4);
//!
//! assert_eq!(config.get_cursor_marker(), '▏');
//! assert_eq!(config.get_tab_width(), 4);
//! ```

/// Character drawn at the cursor position by default.
pub const DEFAULT_CURSOR_MARKER: char = '|';

/// Number of spaces that the Tab key inserts by default.
pub const DEFAULT_TAB_WIDTH: usize = 2;

/// Settings for an editor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditorConfig {
    cursor_marker: char,
    tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            cursor_marker: DEFAULT_CURSOR_MARKER,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl EditorConfig {
    /// Set the character drawn at the cursor position when rendering.
    pub fn cursor_marker(mut self, marker: char) -> Self {
        self.cursor_marker = marker;
        self
    }

    /// Set how many spaces the Tab key inserts.
    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    /// The character drawn at the cursor position.
    pub fn get_cursor_marker(&self) -> char {
        self.cursor_marker
    }

    /// How many spaces the Tab key inserts.
    pub fn get_tab_width(&self) -> usize {
        self.tab_width
    }
}
