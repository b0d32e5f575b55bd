//! Error types for payload encoding

use thiserror::Error;

/// Reason a hex-prefixed argument was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexLiteralFault {
    /// The argument does not start with the `x` marker
    #[error("does not start with \"x\"")]
    MissingMarker,

    /// The digits after the marker are empty or not all hexadecimal
    #[error("is not a valid hexadecimal number")]
    NotHex,

    /// The value does not fit the slot it is encoded into
    #[error("does not fit in {bits} bits")]
    TooWide { bits: u32 },
}

/// Failure to encode a command's argument list into a payload
///
/// Argument positions are 1-based, as they appear in the script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("missing argument list: expected `(...)` after the command")]
    MissingArgumentList,

    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    #[error("argument {position} `{text}` {fault}")]
    InvalidHexLiteral {
        position: usize,
        text: String,
        fault: HexLiteralFault,
    },

    #[error("argument {position} `{text}` is not an unsigned decimal number")]
    InvalidDecimalLiteral { position: usize, text: String },
}

/// Convenient Result type
pub type Result<T> = std::result::Result<T, EncodeError>;
