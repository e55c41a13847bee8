//! Integration tests for the Intcode interpreter.
//!
//! Organized by opcode group, each program run through the public API.

use intcode_common::{DecodeError, InstructionSet, Program};
use intcode_vm::{run, run_with_seeds, search, Interpreter, RuntimeError, SearchConfig, State};

// ============================================================
// Helper functions
// ============================================================

/// Run `words` on the full set with `input`, returning the printed output.
fn run_io(words: &[i64], input: &str) -> Result<String, RuntimeError> {
    let mut output = Vec::new();
    run(Program::new(words.to_vec()), input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

/// Run `words` with no input and return final memory.
fn run_memory(words: &[i64]) -> Result<Vec<i64>, RuntimeError> {
    run(Program::new(words.to_vec()), std::io::empty(), std::io::sink()).map(Program::into_words)
}

const EQUALS_8_POSITION: [i64; 11] = [3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
const LESS_THAN_8_POSITION: [i64; 11] = [3, 9, 7, 9, 10, 9, 4, 9, 99, -1, 8];
const EQUALS_8_IMMEDIATE: [i64; 9] = [3, 3, 1108, -1, 8, 3, 4, 3, 99];
const LESS_THAN_8_IMMEDIATE: [i64; 9] = [3, 3, 1107, -1, 8, 3, 4, 3, 99];
const JUMP_POSITION: [i64; 16] = [3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9];
const JUMP_IMMEDIATE: [i64; 13] = [3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1];
const COMPARE_TO_8: [i64; 47] = [
    3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0, 0,
    1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4, 20, 1105,
    1, 46, 98, 99,
];

// ============================================================
// Arithmetic
// ============================================================

#[test]
fn add_multiply_position_mode() {
    let memory = run_memory(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]).unwrap();
    assert_eq!(memory[0], 3500);
}

#[test]
fn small_arithmetic_programs() {
    assert_eq!(run_memory(&[1, 0, 0, 0, 99]).unwrap(), vec![2, 0, 0, 0, 99]);
    assert_eq!(run_memory(&[2, 3, 0, 3, 99]).unwrap(), vec![2, 3, 0, 6, 99]);
    assert_eq!(
        run_memory(&[2, 4, 4, 5, 99, 0]).unwrap(),
        vec![2, 4, 4, 5, 99, 9801]
    );
    assert_eq!(
        run_memory(&[1, 1, 1, 4, 99, 5, 6, 0, 99]).unwrap(),
        vec![30, 1, 1, 4, 2, 5, 6, 0, 99]
    );
}

#[test]
fn destination_mode_digit_is_ignored() {
    assert_eq!(run_memory(&[11101, 2, 3, 5, 99, 0]).unwrap()[5], 5);
    assert_eq!(run_memory(&[11108, 4, 4, 5, 99, 0]).unwrap()[5], 1);
}

#[test]
fn mixed_mode_multiply() {
    assert_eq!(run_memory(&[1002, 4, 3, 4, 33]).unwrap(), vec![1002, 4, 3, 4, 99]);
}

// ============================================================
// Comparison
// ============================================================

#[test]
fn equals_8_position_mode() {
    assert_eq!(run_io(&EQUALS_8_POSITION, "8").unwrap(), "1\n");
    assert_eq!(run_io(&EQUALS_8_POSITION, "7").unwrap(), "0\n");
}

#[test]
fn less_than_8_position_mode() {
    assert_eq!(run_io(&LESS_THAN_8_POSITION, "7").unwrap(), "1\n");
    assert_eq!(run_io(&LESS_THAN_8_POSITION, "9").unwrap(), "0\n");
}

#[test]
fn equals_8_immediate_mode() {
    assert_eq!(run_io(&EQUALS_8_IMMEDIATE, "8").unwrap(), "1\n");
    assert_eq!(run_io(&EQUALS_8_IMMEDIATE, "7").unwrap(), "0\n");
}

#[test]
fn less_than_8_immediate_mode() {
    assert_eq!(run_io(&LESS_THAN_8_IMMEDIATE, "7").unwrap(), "1\n");
    assert_eq!(run_io(&LESS_THAN_8_IMMEDIATE, "9").unwrap(), "0\n");
}

// ============================================================
// Jumps
// ============================================================

#[test]
fn jump_position_mode() {
    assert_eq!(run_io(&JUMP_POSITION, "0").unwrap(), "0\n");
    assert_eq!(run_io(&JUMP_POSITION, "-1").unwrap(), "1\n");
}

#[test]
fn jump_immediate_mode() {
    assert_eq!(run_io(&JUMP_IMMEDIATE, "0").unwrap(), "0\n");
    assert_eq!(run_io(&JUMP_IMMEDIATE, "-1").unwrap(), "1\n");
    assert_eq!(run_io(&JUMP_IMMEDIATE, "5").unwrap(), "1\n");
}

#[test]
fn combined_compare_to_8() {
    assert_eq!(run_io(&COMPARE_TO_8, "7").unwrap(), "999\n");
    assert_eq!(run_io(&COMPARE_TO_8, "-40").unwrap(), "999\n");
    assert_eq!(run_io(&COMPARE_TO_8, "8").unwrap(), "1000\n");
    assert_eq!(run_io(&COMPARE_TO_8, "9").unwrap(), "1001\n");
    assert_eq!(run_io(&COMPARE_TO_8, "1234").unwrap(), "1001\n");
}

// ============================================================
// Input / output
// ============================================================

#[test]
fn several_inputs_consumed_in_order() {
    let program = [3, 0, 3, 1, 4, 1, 4, 0, 99];
    assert_eq!(run_io(&program, "1\n2\n").unwrap(), "2\n1\n");
    assert_eq!(run_io(&program, "1 2").unwrap(), "2\n1\n");
}

#[test]
fn input_exhausted_is_an_error() {
    assert_eq!(
        run_io(&EQUALS_8_POSITION, ""),
        Err(RuntimeError::InputExhausted { at: 0 })
    );
}

#[test]
fn unparsable_input_is_an_error() {
    assert_eq!(
        run_io(&EQUALS_8_POSITION, "eight"),
        Err(RuntimeError::InvalidInput {
            at: 0,
            token: "eight".to_string()
        })
    );
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_is_an_error() {
    let result = run(Program::new(vec![104, 7, 99]), std::io::empty(), BrokenPipe);
    assert_eq!(
        result,
        Err(RuntimeError::OutputFailed {
            at: 0,
            message: "closed".to_string()
        })
    );
}

// ============================================================
// Failure modes
// ============================================================

#[test]
fn unknown_opcode_names_address_and_word() {
    assert_eq!(
        run_memory(&[1101, 0, 0, 0, 77]),
        Err(RuntimeError::Decode(DecodeError::UnknownOpcode {
            at: 4,
            value: 77
        }))
    );
}

#[test]
fn running_off_the_end() {
    assert_eq!(
        run_memory(&[1101, 2, 2, 0]),
        Err(RuntimeError::Runaway { pointer: 4, len: 4 })
    );
}

#[test]
fn empty_program_runs_away_immediately() {
    assert_eq!(run_memory(&[]), Err(RuntimeError::Runaway { pointer: 0, len: 0 }));
}

#[test]
fn read_out_of_bounds() {
    assert_eq!(
        run_memory(&[1, 100, 0, 0, 99]),
        Err(RuntimeError::AddressOutOfBounds {
            at: 0,
            address: 100,
            len: 5
        })
    );
}

#[test]
fn jump_past_end_runs_away() {
    assert_eq!(
        run_memory(&[1105, 1, 50, 99]),
        Err(RuntimeError::Runaway { pointer: 50, len: 4 })
    );
}

#[test]
fn memory_keeps_writes_made_before_failure() {
    let mut vm = Interpreter::new(vec![1101, 5, 5, 5, 77, 0], std::io::empty(), std::io::sink());
    assert!(vm.run().is_err());
    assert_eq!(vm.state(), State::Failed);
    assert_eq!(vm.memory().words(), &[1101, 5, 5, 5, 77, 10]);
}

// ============================================================
// Restricted variant
// ============================================================

#[test]
fn restricted_rejects_full_set_opcodes() {
    let mut vm = Interpreter::restricted(vec![1101, 1, 1, 0, 99]);
    assert_eq!(
        vm.run(),
        Err(RuntimeError::Decode(DecodeError::UnknownOpcode {
            at: 0,
            value: 1101
        }))
    );
}

#[test]
fn restricted_runs_add_mul_programs() {
    let mut vm = Interpreter::restricted(vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
    vm.run().unwrap();
    assert_eq!(vm.instruction_set(), InstructionSet::Restricted);
    assert_eq!(vm.memory().get(0), Some(3500));
}

#[test]
fn seeded_run_and_search_agree() {
    // mem[0] = mem[noun] * mem[verb] over a table where mem[k] = k for k >= 5.
    let mut words = vec![2, 0, 0, 0, 99];
    words.extend(5..100);
    let program = Program::new(words);

    assert_eq!(run_with_seeds(&program, 12, 15), Ok(180));

    let config = SearchConfig {
        range: 10..=20,
        target: 180,
        ..SearchConfig::default()
    };
    let hit = search(&program, &config).unwrap().unwrap();
    // 10 * 18, 12 * 15, 15 * 12 and 18 * 10 all match; the lowest noun wins.
    assert_eq!((hit.noun, hit.verb), (10, 18));
    assert_eq!(hit.answer(), 1018);
}
