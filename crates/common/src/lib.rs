//! Intcode common types and instruction decoding.
//!
//! This crate provides the data model shared by the interpreter and the
//! command-line front end:
//!
//! - [`Program`] — a memory image, parsed from comma-separated source
//! - [`Opcode`] — the nine Intcode opcodes
//! - [`InstructionSet`] — restricted (add/mul/halt) or full dispatch
//! - [`Mode`] — position or immediate parameter addressing
//! - [`Instruction`] — a decoded opcode word
//! - [`LoadError`], [`DecodeError`] — errors from parsing and decoding
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod mode;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, LoadError};
pub use instruction::Instruction;
pub use mode::Mode;
pub use opcode::{InstructionSet, Opcode};
pub use program::Program;
