//! Key binding parse errors.

use thiserror::Error;

/// Key binding parse error variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key binding")]
    Empty,

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}
