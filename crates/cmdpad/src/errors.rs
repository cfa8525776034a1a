//! # Error Types
//!
//! ## Overview
//!
//! Editing itself never fails: out-of-range movements and deletions are clamped or ignored. The
//! errors here come from the edges of the crate, where strings get interpreted as keys or command
//! names.
use crate::commands::CommandError;
use crate::key::KeyError;

/// Wrapper for the errors returned by this crate.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum EditorError {
    /// Failure to interpret key notation.
    #[error("Key error: {0}")]
    KeyFailure(#[from] KeyError),

    /// Failure to interpret a command name.
    #[error("Command error: {0}")]
    CommandFailure(#[from] CommandError),
}

/// Common result type for fallible editor operations.
pub type EditorResult<V> = Result<V, EditorError>;
