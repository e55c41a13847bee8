//! Main execution loop and opcode dispatch.

use std::io::{BufRead, Write};

use crate::error::RuntimeError;
use crate::machine::{Interpreter, State, Step};
use intcode_common::{Instruction, Opcode};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Execute from address 0 until a halt instruction or an error.
    ///
    /// An interpreter runs once. Calling `run` again after it halted or
    /// failed returns [`RuntimeError::AlreadyFinished`].
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        if self.state != State::Ready {
            return Err(RuntimeError::AlreadyFinished);
        }
        while self.step()? == Step::Continue {}
        Ok(())
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> Result<Step, RuntimeError> {
        if self.state != State::Ready {
            return Err(RuntimeError::AlreadyFinished);
        }
        let result = self.fetch().and_then(|instr| self.dispatch(&instr));
        match result {
            Ok(Step::Halted) => self.state = State::Halted,
            Ok(Step::Continue) => {}
            Err(_) => self.state = State::Failed,
        }
        result
    }

    fn dispatch(&mut self, instr: &Instruction) -> Result<Step, RuntimeError> {
        match instr.opcode {
            Opcode::Halt => {
                self.flush_output()?;
                return Ok(Step::Halted);
            }
            Opcode::Add => self.exec_binary(instr, |a, b| a.wrapping_add(b))?,
            Opcode::Mul => self.exec_binary(instr, |a, b| a.wrapping_mul(b))?,
            Opcode::Input => self.exec_input()?,
            Opcode::Output => self.exec_output(instr)?,
            Opcode::JumpIfTrue => return self.exec_jump(instr, |v| v != 0),
            Opcode::JumpIfFalse => return self.exec_jump(instr, |v| v == 0),
            Opcode::LessThan => self.exec_binary(instr, |a, b| i64::from(a < b))?,
            Opcode::Equals => self.exec_binary(instr, |a, b| i64::from(a == b))?,
        }
        self.ip += instr.width();
        Ok(Step::Continue)
    }

    /// `mem[p3] = op(p1, p2)`.
    fn exec_binary(
        &mut self,
        instr: &Instruction,
        op: fn(i64, i64) -> i64,
    ) -> Result<(), RuntimeError> {
        let a = self.operand(instr, 1)?;
        let b = self.operand(instr, 2)?;
        let dst = self.param(3)?;
        self.store(dst, op(a, b))
    }

    fn exec_input(&mut self) -> Result<(), RuntimeError> {
        let dst = self.param(1)?;
        let value = self.read_input()?;
        self.store(dst, value)
    }

    fn exec_output(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let value = self.operand(instr, 1)?;
        self.write_output(value)
    }

    /// Set the pointer to `p2` if `cond(p1)`, otherwise fall through.
    fn exec_jump(
        &mut self,
        instr: &Instruction,
        cond: fn(i64) -> bool,
    ) -> Result<Step, RuntimeError> {
        let value = self.operand(instr, 1)?;
        let target = self.operand(instr, 2)?;
        if !cond(value) {
            self.ip += instr.width();
            return Ok(Step::Continue);
        }
        self.ip = usize::try_from(target).map_err(|_| RuntimeError::Runaway {
            pointer: target,
            len: self.memory.len(),
        })?;
        Ok(Step::Continue)
    }
}
