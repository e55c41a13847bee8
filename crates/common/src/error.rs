//! Load and decode errors for Intcode programs.

use thiserror::Error;

/// Errors that occur while parsing program source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source had no first line, or the line was blank.
    #[error("input did not contain an Intcode program")]
    Empty,

    /// A comma-separated token is not a base-10 integer.
    #[error("unable to convert token '{token}' at index {index} to a number")]
    InvalidToken { index: usize, token: String },
}

/// Errors that occur while decoding the word at the instruction pointer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode is not part of the active instruction set.
    #[error("unknown opcode in word {value} at address {at}")]
    UnknownOpcode { at: usize, value: i64 },

    /// A parameter mode digit is neither 0 (position) nor 1 (immediate).
    #[error("invalid parameter mode in word {value} at address {at}")]
    InvalidMode { at: usize, value: i64 },

    /// A numeric code that names no opcode.
    #[error("invalid opcode: {0}")]
    InvalidOpcode(i64),

    /// A mode digit other than 0 or 1.
    #[error("invalid mode digit: {0}")]
    InvalidModeDigit(i64),
}
