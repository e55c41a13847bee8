//! Instruction decoding.
//!
//! An instruction word packs the opcode into its two low decimal digits and
//! one mode digit per parameter above them, least significant first:
//! ```text
//!   1002  ->  opcode 02, p1 mode 0, p2 mode 1, p3 mode 0
//!    CBA DE
//! ```
//! Under [`InstructionSet::Restricted`] the word is the bare opcode and all
//! parameters are positions.

use crate::error::DecodeError;
use crate::mode::Mode;
use crate::opcode::{InstructionSet, Opcode};

/// A decoded instruction header: the opcode plus the mode of each parameter.
///
/// Parameter values themselves stay in memory and are fetched by the
/// interpreter; this struct only describes how to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Mode of parameters 1, 2 and 3. Unused slots are `Position`.
    pub modes: [Mode; 3],
}

impl Instruction {
    /// Create an instruction with every parameter in position mode.
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            modes: [Mode::Position; 3],
        }
    }

    /// Decode the word `value` found at address `at`.
    pub fn decode(value: i64, at: usize, set: InstructionSet) -> Result<Self, DecodeError> {
        let (code, mut mode_digits) = match set {
            InstructionSet::Restricted => (value, 0),
            InstructionSet::Full => (value % 100, value / 100),
        };

        let opcode = Opcode::try_from(code)
            .ok()
            .filter(|&op| set.supports(op))
            .ok_or(DecodeError::UnknownOpcode { at, value })?;

        let mut modes = [Mode::Position; 3];
        for mode in &mut modes {
            *mode = Mode::try_from(mode_digits % 10)
                .map_err(|_| DecodeError::InvalidMode { at, value })?;
            mode_digits /= 10;
        }
        if mode_digits != 0 {
            return Err(DecodeError::InvalidMode { at, value });
        }

        // Destinations are addresses whatever their digit says.
        if let Some(dst) = opcode.destination() {
            modes[dst - 1] = Mode::Position;
        }

        Ok(Self { opcode, modes })
    }

    /// Mode of the 1-based parameter `param`.
    pub fn mode(&self, param: usize) -> Mode {
        self.modes[param - 1]
    }

    /// Number of words this instruction occupies, opcode word included.
    pub fn width(&self) -> usize {
        1 + self.opcode.param_count()
    }
}
