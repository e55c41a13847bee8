//! Noun/verb search over the restricted instruction set.
//!
//! Two seed values are written into fixed addresses of a fresh copy of the
//! program, the copy runs to completion, and the word left at address 0 is
//! compared against a target. Pairs are tried noun-major: every verb for
//! noun 0, then every verb for noun 1, and so on.

use std::ops::RangeInclusive;

use crate::error::RuntimeError;
use crate::machine::Interpreter;
use intcode_common::Program;

/// Target value searched for by default.
pub const DEFAULT_TARGET: i64 = 19_690_720;

/// Parameters of a noun/verb search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Address the noun is written to before each run.
    pub noun_address: i64,
    /// Address the verb is written to before each run.
    pub verb_address: i64,
    /// Values tried for both noun and verb.
    pub range: RangeInclusive<i64>,
    /// Value that must be left at address 0.
    pub target: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            noun_address: 1,
            verb_address: 2,
            range: 0..=99,
            target: DEFAULT_TARGET,
        }
    }
}

/// The first seed pair that produced the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub noun: i64,
    pub verb: i64,
    /// Value left at address 0 (equal to the target).
    pub value: i64,
}

impl SearchHit {
    /// `100 * noun + verb`, wrapping on overflow.
    pub fn answer(&self) -> i64 {
        self.noun.wrapping_mul(100).wrapping_add(self.verb)
    }
}

/// Run a copy of `program` with the given seeds at addresses 1 and 2 and
/// return the word left at address 0.
pub fn run_with_seeds(program: &Program, noun: i64, verb: i64) -> Result<i64, RuntimeError> {
    let config = SearchConfig::default();
    run_seeded(program, &config, noun, verb)
}

/// Find the first noun/verb pair for which the program leaves
/// `config.target` at address 0.
///
/// Returns `Ok(None)` when every pair was tried without a match. Any run
/// that fails aborts the whole search with that error.
pub fn search(
    program: &Program,
    config: &SearchConfig,
) -> Result<Option<SearchHit>, RuntimeError> {
    search_with(program, config, |_, _, _| {})
}

/// Like [`search`], calling `observe(noun, verb, value)` after every run.
pub fn search_with<F>(
    program: &Program,
    config: &SearchConfig,
    mut observe: F,
) -> Result<Option<SearchHit>, RuntimeError>
where
    F: FnMut(i64, i64, i64),
{
    for noun in config.range.clone() {
        for verb in config.range.clone() {
            let value = run_seeded(program, config, noun, verb)?;
            observe(noun, verb, value);
            if value == config.target {
                return Ok(Some(SearchHit { noun, verb, value }));
            }
        }
    }
    Ok(None)
}

fn run_seeded(
    program: &Program,
    config: &SearchConfig,
    noun: i64,
    verb: i64,
) -> Result<i64, RuntimeError> {
    let mut vm = Interpreter::restricted(program.clone());
    vm.store(config.noun_address, noun)?;
    vm.store(config.verb_address, verb)?;
    vm.run()?;
    vm.load(0)
}
