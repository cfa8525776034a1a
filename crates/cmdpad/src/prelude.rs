//! # Common imports
//!
//! Re-exports the types that most users of this crate need.
pub use crate::commands::{CommandError, CommandEvent};
pub use crate::config::EditorConfig;
pub use crate::controller::{CommandHandler, EditorController};
pub use crate::editing::{DocumentBuffer, LineBuffer, LineEdit};
pub use crate::errors::{EditorError, EditorResult};
pub use crate::key::{KeyClass, KeyError, TerminalKey};
