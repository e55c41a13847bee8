//! Interpreter state: memory, instruction pointer, input and output.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::RuntimeError;
use intcode_common::{Instruction, InstructionSet, Mode, Program};

/// Lifecycle of one interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Constructed, or mid-run.
    Ready,
    /// A halt instruction executed.
    Halted,
    /// An instruction failed; memory holds whatever was written before it.
    Failed,
}

/// Outcome of a single [`Interpreter::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The instruction completed and the pointer addresses the next one.
    Continue,
    /// The instruction was a halt.
    Halted,
}

/// The Intcode interpreter.
///
/// Owns the program it runs; writes land in that same buffer and are visible
/// through [`Interpreter::memory`] once the run is over.
pub struct Interpreter<R, W> {
    /// Program memory, mutated in place.
    pub(crate) memory: Program,
    /// Instruction pointer.
    pub(crate) ip: usize,
    /// Source of opcode 3 values.
    pub(crate) input: R,
    /// Tokens read from `input` but not yet consumed.
    pub(crate) pending: VecDeque<String>,
    /// Sink for opcode 4 values.
    pub(crate) output: W,
    /// Which opcodes and modes decode.
    pub(crate) instruction_set: InstructionSet,
    pub(crate) state: State,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Create an interpreter for the full instruction set.
    pub fn new(program: impl Into<Program>, input: R, output: W) -> Self {
        Self {
            memory: program.into(),
            ip: 0,
            input,
            pending: VecDeque::new(),
            output,
            instruction_set: InstructionSet::Full,
            state: State::Ready,
        }
    }

    /// Select the instruction set used to decode.
    pub fn with_instruction_set(mut self, instruction_set: InstructionSet) -> Self {
        self.instruction_set = instruction_set;
        self
    }

    /// Program memory in its current state.
    pub fn memory(&self) -> &Program {
        &self.memory
    }

    /// Consume the interpreter and return its memory.
    pub fn into_memory(self) -> Program {
        self.memory
    }

    /// Current instruction pointer.
    pub fn pointer(&self) -> usize {
        self.ip
    }

    /// Where this interpreter is in its single run.
    pub fn state(&self) -> State {
        self.state
    }

    /// The instruction set used to decode.
    pub fn instruction_set(&self) -> InstructionSet {
        self.instruction_set
    }

    /// Read the word at `address`.
    pub(crate) fn load(&self, address: i64) -> Result<i64, RuntimeError> {
        self.memory
            .get(address)
            .ok_or(RuntimeError::AddressOutOfBounds {
                at: self.ip,
                address,
                len: self.memory.len(),
            })
    }

    /// Write `value` at `address`.
    pub(crate) fn store(&mut self, address: i64, value: i64) -> Result<(), RuntimeError> {
        let (at, len) = (self.ip, self.memory.len());
        let slot = self
            .memory
            .get_mut(address)
            .ok_or(RuntimeError::AddressOutOfBounds { at, address, len })?;
        *slot = value;
        Ok(())
    }

    /// Decode the instruction at the pointer.
    pub(crate) fn fetch(&self) -> Result<Instruction, RuntimeError> {
        if self.ip >= self.memory.len() {
            return Err(RuntimeError::Runaway {
                pointer: self.ip as i64,
                len: self.memory.len(),
            });
        }
        let word = self.load(self.ip as i64)?;
        Ok(Instruction::decode(word, self.ip, self.instruction_set)?)
    }

    /// Raw value of the 1-based parameter `param` of the current instruction.
    pub(crate) fn param(&self, param: usize) -> Result<i64, RuntimeError> {
        self.load((self.ip + param) as i64)
    }

    /// Resolve a source parameter to its operand according to its mode.
    pub(crate) fn operand(&self, instr: &Instruction, param: usize) -> Result<i64, RuntimeError> {
        let raw = self.param(param)?;
        match instr.mode(param) {
            Mode::Position => self.load(raw),
            Mode::Immediate => Ok(raw),
        }
    }

    /// Next integer from the input stream. Blocks until a line is available.
    pub(crate) fn read_input(&mut self) -> Result<i64, RuntimeError> {
        let at = self.ip;
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token
                    .parse()
                    .map_err(|_| RuntimeError::InvalidInput { at, token });
            }

            let mut line = String::new();
            let n = self
                .input
                .read_line(&mut line)
                .map_err(|e| RuntimeError::InputFailed {
                    at,
                    message: e.to_string(),
                })?;
            if n == 0 {
                return Err(RuntimeError::InputExhausted { at });
            }
            self.pending.extend(
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            );
        }
    }

    /// Write one value followed by a newline.
    pub(crate) fn write_output(&mut self, value: i64) -> Result<(), RuntimeError> {
        let at = self.ip;
        writeln!(self.output, "{value}").map_err(|e| output_failed(at, e))
    }

    pub(crate) fn flush_output(&mut self) -> Result<(), RuntimeError> {
        let at = self.ip;
        self.output.flush().map_err(|e| output_failed(at, e))
    }
}

impl Interpreter<io::Empty, io::Sink> {
    /// Create an interpreter for the restricted add/multiply/halt set, with
    /// no input and discarded output.
    pub fn restricted(program: impl Into<Program>) -> Self {
        Interpreter::new(program, io::empty(), io::sink())
            .with_instruction_set(InstructionSet::Restricted)
    }
}

fn output_failed(at: usize, e: io::Error) -> RuntimeError {
    RuntimeError::OutputFailed {
        at,
        message: e.to_string(),
    }
}
