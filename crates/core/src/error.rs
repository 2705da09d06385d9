//! Error types for typeface conversion.

use std::result;

use skrifa::raw::ReadError;

/// Errors that abort a conversion. No partial output is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("{0} fonts are not supported, convert to TTF or OTF first")]
    UnsupportedContainer(&'static str),

    #[error("malformed WOFF data: {0}")]
    Woff(String),

    #[error("invalid unitsPerEm {0}: font cannot be scaled")]
    InvalidUnitsPerEm(u16),

    #[error("failed to draw glyph {glyph_id}: {message}")]
    Draw { glyph_id: u32, message: String },

    #[error("failed to serialize font data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;
