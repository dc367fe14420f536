//! Error types for dense table encoding.

use std::{io, result};

/// Errors that can occur while encoding or serializing a glyph name table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("too many distinct tokens: {0} (at most 65535 fit a 16-bit token index)")]
    TooManyTokens(usize),

    #[error("name for U+{codepoint:04X} splits into {tokens} tokens (at most 255)")]
    NameTooLong { codepoint: u32, tokens: usize },

    #[error("codepoint range {base:#X}..={last:#X} is too large")]
    RangeTooLarge { base: u32, last: u32 },

    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
