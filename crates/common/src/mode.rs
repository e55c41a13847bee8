//! Parameter addressing modes.

use crate::error::DecodeError;

/// How a source parameter is turned into an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The parameter is an address; the operand is the word stored there.
    #[default]
    Position,
    /// The parameter is the operand itself.
    Immediate,
}

impl TryFrom<i64> for Mode {
    type Error = DecodeError;

    /// Decode a single mode digit.
    fn try_from(digit: i64) -> Result<Self, Self::Error> {
        match digit {
            0 => Ok(Mode::Position),
            1 => Ok(Mode::Immediate),
            _ => Err(DecodeError::InvalidModeDigit(digit)),
        }
    }
}
