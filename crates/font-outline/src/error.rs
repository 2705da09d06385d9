//! Error types for reading typeface path strings.

use std::result;

/// Errors raised while decoding a path-command string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown path command {0:?}")]
    UnknownCommand(String),

    #[error("path command '{0}' is missing coordinates")]
    MissingCoordinates(char),

    #[error("invalid coordinate {0:?}")]
    InvalidNumber(String),
}

pub type Result<T> = result::Result<T, Error>;
