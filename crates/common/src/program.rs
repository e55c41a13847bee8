//! Program representation for Intcode memory images.
//!
//! Program source is a single line of comma-separated base-10 integers.
//! The same vector serves as the interpreter's memory once a run starts.

use std::fmt;

use crate::error::LoadError;

/// An Intcode program: the initial contents of memory.
///
/// Cloning is the way to reuse one program across independent runs; the
/// interpreter mutates the image it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    words: Vec<i64>,
}

impl Program {
    /// Create a program from raw words.
    pub fn new(words: Vec<i64>) -> Self {
        Self { words }
    }

    /// Parse program source text.
    ///
    /// Only the first line is read. Tokens are trimmed before parsing, so
    /// `"1, 0, 0, 0, 99"` is accepted; an empty token is not.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let line = text.lines().next().map(str::trim).unwrap_or_default();
        if line.is_empty() {
            return Err(LoadError::Empty);
        }

        let words = line
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token.parse::<i64>().map_err(|_| LoadError::InvalidToken {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { words })
    }

    /// Number of words in memory.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `address`, or `None` if the address is negative or past the end.
    pub fn get(&self, address: i64) -> Option<i64> {
        let index = usize::try_from(address).ok()?;
        self.words.get(index).copied()
    }

    /// Mutable word at `address`, or `None` if out of range.
    pub fn get_mut(&mut self, address: i64) -> Option<&mut i64> {
        let index = usize::try_from(address).ok()?;
        self.words.get_mut(index)
    }

    /// All words, in address order.
    pub fn words(&self) -> &[i64] {
        &self.words
    }

    /// Consume the program and return its words.
    pub fn into_words(self) -> Vec<i64> {
        self.words
    }
}

impl From<Vec<i64>> for Program {
    fn from(words: Vec<i64>) -> Self {
        Self::new(words)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
