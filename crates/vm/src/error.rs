//! Runtime errors for the Intcode interpreter.
//!
//! Every error that happens while an instruction executes carries the
//! address of that instruction (`at`). All of them end the run.

use intcode_common::DecodeError;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A read or write addressed memory outside `[0, len)`.
    #[error("address {address} out of bounds (length {len}) at address {at}")]
    AddressOutOfBounds { at: usize, address: i64, len: usize },

    /// The word at the instruction pointer could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The instruction pointer left memory without reaching a halt.
    #[error("instruction pointer {pointer} ran past end of memory (length {len})")]
    Runaway { pointer: i64, len: usize },

    /// An input instruction found no more input.
    #[error("input exhausted at address {at}")]
    InputExhausted { at: usize },

    /// An input token was not a base-10 integer.
    #[error("unable to parse input '{token}' as an integer at address {at}")]
    InvalidInput { at: usize, token: String },

    /// Reading from the input stream failed.
    #[error("input read failed at address {at}: {message}")]
    InputFailed { at: usize, message: String },

    /// Writing to the output stream failed.
    #[error("output write failed at address {at}: {message}")]
    OutputFailed { at: usize, message: String },

    /// `run` was called on an interpreter whose run already ended.
    #[error("interpreter already finished; construct a new one per run")]
    AlreadyFinished,
}
