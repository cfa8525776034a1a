//! # Command tokens
//!
//! ## Overview
//!
//! The text buffer doubles as a command line: when the whole document ends with one of a few
//! reserved tokens, the token is treated as a command rather than as content. This module
//! recognizes those tokens and removes them from the text.
//!
//! Detection only ever looks at the end of an immutable snapshot of the flattened document, so it
//! doesn't matter how the token got there (typed, pasted, or left over after an edit).
//!
//! | Event                   | Token     |
//! | ----------------------- | --------- |
//! | [CommandEvent::Submit]  | `:submit` |
//! | [CommandEvent::Next]    | `:next`   |
//! | [CommandEvent::Copy]    | `:copy`   |
//!
//! ```
//! use cmdpad::commands::{parse, CommandEvent};
//!
//! assert_eq!(parse("hello:submit"), Some((CommandEvent::Submit, "hello")));
//! assert_eq!(parse("hello:next"), Some((CommandEvent::Next, "hello")));
//! assert_eq!(parse("plain text"), None);
//! ```
use std::fmt;
use std::str::FromStr;

/// Errors that can be encountered while interpreting command names.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum CommandError {
    /// Error for unknown command names.
    #[error("Unknown command: {0:?}")]
    Unknown(String),
}

/// A command recognized at the end of the buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CommandEvent {
    /// Send the text off for processing.
    Submit,

    /// Move on to the next input.
    Next,

    /// Copy the text elsewhere.
    Copy,
}

impl CommandEvent {
    /// Every command, in the order that they are checked for.
    pub const ALL: [CommandEvent; 3] = [CommandEvent::Submit, CommandEvent::Next, CommandEvent::Copy];

    /// The literal text that triggers this command.
    pub fn token(&self) -> &'static str {
        match self {
            CommandEvent::Submit => ":submit",
            CommandEvent::Next => ":next",
            CommandEvent::Copy => ":copy",
        }
    }
}

impl fmt::Display for CommandEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CommandEvent {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix(':').unwrap_or(s);

        CommandEvent::ALL
            .into_iter()
            .find(|ev| &ev.token()[1..] == name)
            .ok_or_else(|| CommandError::Unknown(s.to_string()))
    }
}

/// Find the command token that `text` ends with, if any.
pub fn detect(text: &str) -> Option<CommandEvent> {
    CommandEvent::ALL.into_iter().find(|ev| text.ends_with(ev.token()))
}

/// Remove the token for `event` from the end of `text`.
///
/// If `text` doesn't end with the token, it is returned unchanged.
pub fn strip(text: &str, event: CommandEvent) -> &str {
    text.strip_suffix(event.token()).unwrap_or(text)
}

/// Detect a trailing command in `text`, and return it along with the text that precedes it.
pub fn parse(text: &str) -> Option<(CommandEvent, &str)> {
    let event = detect(text)?;

    Some((event, strip(text, event)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(detect("hello:submit"), Some(CommandEvent::Submit));
        assert_eq!(detect("hello:next"), Some(CommandEvent::Next));
        assert_eq!(detect("hello:copy"), Some(CommandEvent::Copy));
        assert_eq!(detect(":submit"), Some(CommandEvent::Submit));
        assert_eq!(detect("a\nb\n:copy"), Some(CommandEvent::Copy));

        assert_eq!(detect("plain text"), None);
        assert_eq!(detect(""), None);

        // Incomplete tokens are just content.
        assert_eq!(detect("hello:sub"), None);
        assert_eq!(detect("hello:nex"), None);

        // Tokens only count at the very end.
        assert_eq!(detect(":submit "), None);
        assert_eq!(detect(":submit\n"), None);
        assert_eq!(detect(":next more text"), None);

        // Matching is case-sensitive.
        assert_eq!(detect("hello:SUBMIT"), None);
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("hello:submit", CommandEvent::Submit), "hello");
        assert_eq!(strip("héllo:next", CommandEvent::Next), "héllo");
        assert_eq!(strip(":copy", CommandEvent::Copy), "");
        assert_eq!(strip("x:copy:copy", CommandEvent::Copy), "x:copy");

        // Text without the token is left alone.
        assert_eq!(strip("hello", CommandEvent::Submit), "hello");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("hello:submit"), Some((CommandEvent::Submit, "hello")));
        assert_eq!(parse("hello:next"), Some((CommandEvent::Next, "hello")));
        assert_eq!(parse("line 1\nline 2:copy"), Some((CommandEvent::Copy, "line 1\nline 2")));
        assert_eq!(parse("plain text"), None);
    }

    #[test]
    fn test_event_names() {
        for ev in CommandEvent::ALL {
            assert_eq!(ev.to_string(), ev.token());
            assert_eq!(ev.token().parse::<CommandEvent>(), Ok(ev));
        }

        assert_eq!("submit".parse::<CommandEvent>(), Ok(CommandEvent::Submit));
        assert_eq!("next".parse::<CommandEvent>(), Ok(CommandEvent::Next));
        assert_eq!(
            ":quit".parse::<CommandEvent>(),
            Err(CommandError::Unknown(":quit".to_string()))
        );
        assert_eq!("".parse::<CommandEvent>(), Err(CommandError::Unknown("".to_string())));
    }
}
