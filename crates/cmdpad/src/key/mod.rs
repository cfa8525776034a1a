//! # Input keys
//!
//! ## Overview
//!
//! This module contains code for representing and classifying keys. A [TerminalKey] wraps the
//! [KeyCode] and [KeyModifiers] of a crossterm [KeyEvent], and [TerminalKey::class] reduces it to
//! the handful of [KeyClass] values that the editor responds to.
//!
//! Keys can also be written using Vim-style notation, which is handy for scripting input:
//!
//! ```
//! use cmdpad::key::{KeyClass, TerminalKey};
//!
//! let keys = TerminalKey::from_macro_str("hi<Left><BS><CR>").unwrap();
//! let classes: Vec<KeyClass> = keys.iter().map(TerminalKey::class).collect();
//!
//! assert_eq!(classes, vec![
//!     KeyClass::Char('h'),
//!     KeyClass::Char('i'),
//!     KeyClass::Left,
//!     KeyClass::Backspace,
//!     KeyClass::Enter,
//! ]);
//! ```
use std::fmt;
use std::str::FromStr;

use self::parse::{parse_key_str, parse_macro_str};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(crate) mod parse;

/// Errors that occur while interpreting key notation.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyError {
    /// Failure to interpret key string.
    #[error("Invalid key string: {0:?}")]
    Invalid(String),

    /// Empty key string.
    #[error("Empty key string")]
    Empty,
}

/// The ways in which the editor can respond to a key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyClass {
    /// A printable character to insert.
    Char(char),

    /// Move the cursor left.
    Left,

    /// Move the cursor right.
    Right,

    /// Move the cursor up a line.
    Up,

    /// Move the cursor down a line.
    Down,

    /// Break the line.
    Enter,

    /// Insert indentation.
    Tab,

    /// Delete the previous character.
    Backspace,

    /// A key that the editor ignores.
    Other,
}

/// A key pressed in a terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TerminalKey {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl TerminalKey {
    pub(crate) fn new(code: KeyCode, mut modifiers: KeyModifiers) -> Self {
        if let KeyCode::Char(_) = code {
            // SHIFT is included for things like ':' and '?' on Windows, but not on *nix systems,
            // so remove it for characters, so that it doesn't break hashing and comparisons.
            modifiers -= KeyModifiers::SHIFT;
        }

        Self { code, modifiers }
    }

    /// The key code.
    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// The modifiers held down while the key was pressed.
    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// Return the character this key types, if it types one.
    pub fn get_char(&self) -> Option<char> {
        if let KeyCode::Char(c) = self.code {
            if (self.modifiers - KeyModifiers::SHIFT).is_empty() && !c.is_control() {
                return Some(c);
            }
        }

        None
    }

    /// Classify this key by how the editor should respond to it.
    pub fn class(&self) -> KeyClass {
        match self.code {
            KeyCode::Left => KeyClass::Left,
            KeyCode::Right => KeyClass::Right,
            KeyCode::Up => KeyClass::Up,
            KeyCode::Down => KeyClass::Down,
            KeyCode::Enter => KeyClass::Enter,
            KeyCode::Tab => KeyClass::Tab,
            KeyCode::Backspace => KeyClass::Backspace,
            KeyCode::Char('\n') if self.modifiers.is_empty() => KeyClass::Enter,
            KeyCode::Char('h') if self.modifiers == KeyModifiers::CONTROL => KeyClass::Backspace,
            KeyCode::Char(_) => self.get_char().map(KeyClass::Char).unwrap_or(KeyClass::Other),
            _ => KeyClass::Other,
        }
    }

    /// Parse a sequence of keys written in Vim-style notation, such as `"abc<Left><CR>"`.
    pub fn from_macro_str(input: &str) -> Result<Vec<Self>, KeyError> {
        if input.is_empty() {
            return Err(KeyError::Empty);
        } else if let Ok((_, keys)) = parse_macro_str(input) {
            return Ok(keys);
        } else {
            return Err(KeyError::Invalid(input.to_string()));
        }
    }
}

impl FromStr for TerminalKey {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(KeyError::Empty);
        } else if let Ok((_, key)) = parse_key_str(input) {
            return Ok(key);
        } else {
            return Err(KeyError::Invalid(input.to_string()));
        }
    }
}

impl fmt::Display for TerminalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut res = String::new();

        let push_mods = |res: &mut String| {
            if self.modifiers.contains(KeyModifiers::CONTROL) {
                res.push_str("C-");
            }

            if self.modifiers.contains(KeyModifiers::SHIFT) {
                res.push_str("S-");
            }

            if self.modifiers.contains(KeyModifiers::ALT) {
                res.push_str("A-");
            }
        };

        let push_named = |res: &mut String, name: &str| {
            res.push('<');
            push_mods(res);
            res.push_str(name);
            res.push('>');
        };

        match self.code {
            KeyCode::Left => push_named(&mut res, "Left"),
            KeyCode::Right => push_named(&mut res, "Right"),
            KeyCode::Up => push_named(&mut res, "Up"),
            KeyCode::Down => push_named(&mut res, "Down"),
            KeyCode::Backspace => push_named(&mut res, "BS"),
            KeyCode::Enter => push_named(&mut res, "Enter"),
            KeyCode::Home => push_named(&mut res, "Home"),
            KeyCode::End => push_named(&mut res, "End"),
            KeyCode::PageUp => push_named(&mut res, "PageUp"),
            KeyCode::PageDown => push_named(&mut res, "PageDown"),
            KeyCode::Esc => push_named(&mut res, "Esc"),
            KeyCode::Delete => push_named(&mut res, "Del"),
            KeyCode::Insert => push_named(&mut res, "Insert"),
            KeyCode::Tab => push_named(&mut res, "Tab"),
            KeyCode::Null => push_named(&mut res, "Nul"),
            KeyCode::BackTab => res.push_str("<S-Tab>"),
            KeyCode::F(n) => {
                let n = format!("F{n}");

                push_named(&mut res, n.as_str());
            },
            KeyCode::Char(c) => {
                if self.modifiers.is_empty() {
                    match c {
                        '<' => res.push_str("<lt>"),
                        '\n' => res.push_str("<NL>"),
                        c => res.push(c),
                    }
                } else {
                    let c = match c {
                        ' ' => "Space".to_string(),
                        '<' => "lt".to_string(),
                        c if self.modifiers.contains(KeyModifiers::CONTROL) => {
                            c.to_uppercase().to_string()
                        },
                        c => c.to_string(),
                    };

                    push_named(&mut res, c.as_str());
                }
            },
            _ => {
                // Keys that the editor never looks at have no notation.
            },
        }

        f.write_str(&res)
    }
}

impl From<KeyCode> for TerminalKey {
    fn from(code: KeyCode) -> Self {
        TerminalKey::new(code, KeyModifiers::NONE)
    }
}

impl From<KeyEvent> for TerminalKey {
    fn from(ke: KeyEvent) -> Self {
        TerminalKey::new(ke.code, ke.modifiers)
    }
}
