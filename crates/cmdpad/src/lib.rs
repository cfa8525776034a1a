//! # cmdpad
//!
//! ## Overview
//!
//! This crate provides the text-input core of an interactive prompt: a multi-line buffer with a
//! cursor, where a few reserved words typed at the very end of the text act as commands instead
//! of content.
//!
//! The [editing] module contains the line and document buffers, [commands] recognizes the
//! command tokens, and [controller] ties them together by mapping [key::TerminalKey] input onto
//! buffer edits and dispatching detected commands to a [controller::CommandHandler].
//!
//! ## Example
//!
//! ```
//! use cmdpad::commands::CommandEvent;
//! use cmdpad::controller::EditorController;
//!
//! let mut submitted = vec![];
//! let mut editor = EditorController::new(|ev: CommandEvent, text: &str| {
//!     submitted.push((ev, text.to_string()));
//! });
//!
//! editor.feed("hello<Enter>world:submit").unwrap();
//! assert_eq!(editor.text(), "hello\nworld");
//!
//! drop(editor);
//! assert_eq!(submitted, vec![(CommandEvent::Submit, "hello\nworld".to_string())]);
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

#[macro_use]
mod util;

pub mod commands;
pub mod config;
pub mod controller;
pub mod editing;
pub mod errors;
pub mod key;
pub mod prelude;

pub use crossterm;
