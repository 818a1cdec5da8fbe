//! Simulator Error Definitions.
//!
//! This module defines the error handling for the simulator. All variants are
//! configuration errors in the sense of the error taxonomy: they are raised
//! before or while building simulation state, and a run never starts (or
//! continues) once one occurs. Segmentation and protection violations are
//! *not* errors — they are statistics the engine accounts for and moves past.

use thiserror::Error;

use super::constants::MAX_FRAMES;

/// Errors raised while configuring or loading a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The one-letter replacement algorithm code is not recognized.
    #[error("unknown replacement algorithm code '{0}' (expected one of: f s r n c a)")]
    UnknownAlgorithm(char),

    /// An output option letter is not recognized.
    #[error("unknown output option '{0}' (expected any of: O P F S)")]
    UnknownOutputOption(char),

    /// The configured frame-pool size is outside the supported range.
    #[error("frame pool size {0} out of range (1..={max})", max = MAX_FRAMES)]
    InvalidFrameCount(usize),

    /// An input file could not be read at all.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line of an input file failed to parse or validate.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The random number table holds no values to draw from.
    #[error("random number table is empty")]
    EmptyRandomTable,

    /// The trace issued a memory access before any context switch selected
    /// a current process.
    #[error("memory access before any context switch")]
    NoCurrentProcess,

    /// Writing simulation output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON configuration override failed to deserialize.
    #[error("malformed configuration JSON: {0}")]
    Config(#[from] serde_json::Error),
}
