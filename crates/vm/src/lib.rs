//! Intcode interpreter — executes integer programs in place.
//!
//! The interpreter owns a memory image, an instruction pointer, an input
//! reader and an output writer. It fetches the word at the pointer, decodes
//! the opcode and parameter modes, performs the effect and advances, until a
//! halt instruction or an error.
//!
//! # Usage
//!
//! ```
//! use intcode_vm::Interpreter;
//!
//! let mut output = Vec::new();
//! let mut vm = Interpreter::new(vec![3, 0, 4, 0, 99], &b"42\n"[..], &mut output);
//! vm.run().unwrap();
//! drop(vm);
//! assert_eq!(output, b"42\n");
//! ```
//!
//! The restricted add/multiply/halt set drives the noun/verb [`search`].

pub mod error;
pub mod execute;
pub mod machine;
pub mod search;

pub use error::RuntimeError;
pub use machine::{Interpreter, State, Step};
pub use search::{run_with_seeds, search, search_with, SearchConfig, SearchHit};

use std::io::{BufRead, Write};

use intcode_common::Program;

/// Run `program` on the full instruction set and return the final memory.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution fails (bad address, unknown
/// opcode, running off the end of memory, input or output failure).
pub fn run<R: BufRead, W: Write>(
    program: Program,
    input: R,
    output: W,
) -> Result<Program, RuntimeError> {
    let mut vm = Interpreter::new(program, input, output);
    vm.run()?;
    Ok(vm.into_memory())
}
