//! # Text buffers
//!
//! ## Overview
//!
//! This module contains the two levels of editable text: a [LineBuffer] for a single line with a
//! cursor, and a [DocumentBuffer] that strings lines together and tracks which one is active.
pub mod document;
pub mod line;

pub use self::document::DocumentBuffer;
pub use self::line::{LineBuffer, LineEdit};
