//! Opcode definitions for the Intcode instruction set.

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The discriminant is the two-digit opcode found in the low decimal digits
/// of an instruction word.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `mem[p3] = p1 + p2`.
    Add = 1,
    /// `mem[p3] = p1 * p2`.
    Mul = 2,
    /// Read one integer from input into `mem[p1]`.
    Input = 3,
    /// Write `p1` to output.
    Output = 4,
    /// Jump to `p2` if `p1` is non-zero.
    JumpIfTrue = 5,
    /// Jump to `p2` if `p1` is zero.
    JumpIfFalse = 6,
    /// `mem[p3] = (p1 < p2) as i64`.
    LessThan = 7,
    /// `mem[p3] = (p1 == p2) as i64`.
    Equals = 8,
    /// Stop execution.
    Halt = 99,
}

/// All opcodes, in numeric order.
pub const ALL_OPCODES: [Opcode; 9] = [
    Opcode::Add,
    Opcode::Mul,
    Opcode::Input,
    Opcode::Output,
    Opcode::JumpIfTrue,
    Opcode::JumpIfFalse,
    Opcode::LessThan,
    Opcode::Equals,
    Opcode::Halt,
];

impl TryFrom<i64> for Opcode {
    type Error = DecodeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Opcode::Add),
            2 => Ok(Opcode::Mul),
            3 => Ok(Opcode::Input),
            4 => Ok(Opcode::Output),
            5 => Ok(Opcode::JumpIfTrue),
            6 => Ok(Opcode::JumpIfFalse),
            7 => Ok(Opcode::LessThan),
            8 => Ok(Opcode::Equals),
            99 => Ok(Opcode::Halt),
            _ => Err(DecodeError::InvalidOpcode(code)),
        }
    }
}

impl Opcode {
    /// The numeric code of this opcode.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Number of parameters following the opcode word.
    pub fn param_count(self) -> usize {
        match self {
            Opcode::Halt => 0,
            Opcode::Input | Opcode::Output => 1,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => 3,
        }
    }

    /// The 1-based index of the parameter this opcode writes to, if any.
    ///
    /// Destination parameters are always addresses and never resolved
    /// through their mode.
    pub fn destination(self) -> Option<usize> {
        match self {
            Opcode::Input => Some(1),
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => Some(3),
            Opcode::Output | Opcode::JumpIfTrue | Opcode::JumpIfFalse | Opcode::Halt => None,
        }
    }
}

/// Which subset of the instruction set a run accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstructionSet {
    /// Add, multiply and halt only. Every word at the instruction pointer
    /// is a bare opcode with no mode digits, and every parameter is a
    /// position.
    Restricted,
    /// All nine opcodes with position and immediate parameter modes.
    #[default]
    Full,
}

impl InstructionSet {
    /// Returns true if `opcode` may execute under this set.
    pub fn supports(self, opcode: Opcode) -> bool {
        match self {
            InstructionSet::Restricted => {
                matches!(opcode, Opcode::Add | Opcode::Mul | Opcode::Halt)
            }
            InstructionSet::Full => true,
        }
    }
}
