//! Deterministic Random Number Source.
//!
//! Randomized policies (Random, NRU) draw from a fixed table of values read
//! once at startup, not from a live generator. Every draw consumes exactly
//! one table position regardless of the requested bound, so two runs over
//! the same table and trace make identical choices.

use std::fs;

use crate::common::SimError;

/// A cyclic table of pre-generated random values.
#[derive(Debug, Clone)]
pub struct RandomSource {
    /// The fixed value table; never empty.
    values: Vec<u64>,
    /// Positions consumed so far; indexes the table modulo its length.
    cursor: usize,
}

impl RandomSource {
    /// Creates a source over a fixed table of values.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptyRandomTable`] when `values` is empty.
    pub fn new(values: Vec<u64>) -> Result<Self, SimError> {
        if values.is_empty() {
            return Err(SimError::EmptyRandomTable);
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Parses a random table from text: a count followed by that many
    /// whitespace-separated non-negative integers.
    ///
    /// # Arguments
    ///
    /// * `text` - The file contents.
    /// * `origin` - Path used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] on malformed numbers or a short table,
    /// and [`SimError::EmptyRandomTable`] on a zero count.
    pub fn parse(text: &str, origin: &str) -> Result<Self, SimError> {
        let mut tokens = text.lines().enumerate().flat_map(|(index, line)| {
            line.split_whitespace().map(move |token| (index + 1, token))
        });

        let (line, count_token) = tokens.next().ok_or_else(|| SimError::Parse {
            path: origin.to_string(),
            line: 1,
            message: "missing random value count".to_string(),
        })?;
        let count: usize = count_token.parse().map_err(|_| SimError::Parse {
            path: origin.to_string(),
            line,
            message: format!("invalid random value count '{count_token}'"),
        })?;

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let (line, token) = tokens.next().ok_or_else(|| SimError::Parse {
                path: origin.to_string(),
                line: text.lines().count(),
                message: format!("expected {count} random values, found {}", values.len()),
            })?;
            let value: u64 = token.parse().map_err(|_| SimError::Parse {
                path: origin.to_string(),
                line,
                message: format!("invalid random value '{token}'"),
            })?;
            values.push(value);
        }

        Self::new(values)
    }

    /// Reads and parses a random table file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Read`] when the file cannot be read, plus any
    /// [`RandomSource::parse`] error.
    pub fn from_file(path: &str) -> Result<Self, SimError> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Draws the next value, reduced modulo `bound`.
    ///
    /// The cursor advances by exactly one position per call; the table is
    /// consumed cyclically. `bound` must be non-zero (callers only draw
    /// over non-empty candidate sets).
    pub fn next(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "draw over an empty candidate set");
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        (value % bound as u64) as usize
    }

    /// Number of values in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; an empty table cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
