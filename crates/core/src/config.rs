//! Configuration system for the paging simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize a run. It provides:
//! 1. **Defaults:** `Config::default()` reproduces the reference weights and
//!    a 16-frame pool.
//! 2. **Structures:** Output toggles and the per-operation cost model.
//! 3. **Enums:** The closed set of replacement algorithms, selected once at
//!    configuration time.
//!
//! Configuration is supplied from the command line (one-letter codes) or
//! deserialized from JSON over the defaults.

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants;

/// Page replacement algorithms.
///
/// Specifies the strategy used to select a victim frame when a page fault
/// finds no free frame in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Algorithm {
    /// First-In, First-Out.
    ///
    /// Evicts the frame that was allocated earliest, ignoring use.
    #[default]
    #[serde(alias = "FIFO")]
    Fifo,
    /// FIFO with a second chance.
    ///
    /// Skips (and clears) frames whose page was referenced since the last
    /// pass, evicting the first unreferenced one.
    SecondChance,
    /// Random selection over the whole pool.
    Random,
    /// Not Recently Used.
    ///
    /// Classifies frames by referenced/modified bits and picks randomly
    /// from the lowest class, sweeping referenced bits periodically.
    #[serde(alias = "NRU")]
    Nru,
    /// Classic clock hand over the allocated frames.
    Clock,
    /// Aging counters, one per frame, shifted on every replacement.
    Aging,
}

impl Algorithm {
    /// Resolves a one-letter command-line code to an algorithm.
    ///
    /// # Arguments
    ///
    /// * `code` - `f`, `s`, `r`, `n`, `c`, or `a`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownAlgorithm`] for any other character.
    pub fn from_code(code: char) -> Result<Self, SimError> {
        match code {
            'f' => Ok(Self::Fifo),
            's' => Ok(Self::SecondChance),
            'r' => Ok(Self::Random),
            'n' => Ok(Self::Nru),
            'c' => Ok(Self::Clock),
            'a' => Ok(Self::Aging),
            other => Err(SimError::UnknownAlgorithm(other)),
        }
    }
}

/// Which outputs a run emits.
///
/// Any combination may be enabled; all default to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Per-instruction annotation lines (`O`).
    pub trace: bool,
    /// Final page-table dump, one line per process (`P`).
    pub page_table: bool,
    /// Final frame-table dump (`F`).
    pub frame_table: bool,
    /// Final per-process and aggregate summary (`S`).
    pub summary: bool,
}

impl OutputOptions {
    /// Parses a command-line option string such as `"OPFS"`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownOutputOption`] on any letter outside
    /// `O`, `P`, `F`, `S`.
    pub fn from_flags(flags: &str) -> Result<Self, SimError> {
        let mut options = Self::default();
        for flag in flags.chars() {
            match flag {
                'O' => options.trace = true,
                'P' => options.page_table = true,
                'F' => options.frame_table = true,
                'S' => options.summary = true,
                other => return Err(SimError::UnknownOutputOption(other)),
            }
        }
        Ok(options)
    }

    /// All outputs enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            trace: true,
            page_table: true,
            frame_table: true,
            summary: true,
        }
    }
}

/// Per-operation cost weights.
///
/// The engine charges one weight per sub-event; the total accumulates in a
/// `u64`. Defaults reproduce the reference weights; a JSON override may
/// replace any subset of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Base cost of every read or write access.
    pub read_write: u64,
    /// Cost of a context switch.
    pub context_switch: u64,
    /// Cost of mapping a page into a frame.
    pub map: u64,
    /// Cost of unmapping a victim page.
    pub unmap: u64,
    /// Cost of a page-in from the swap device.
    pub page_in: u64,
    /// Cost of a page-out to the swap device.
    pub page_out: u64,
    /// Cost of a file-in from a mapped file.
    pub file_in: u64,
    /// Cost of a file-out to a mapped file.
    pub file_out: u64,
    /// Cost of zero-filling a fresh page.
    pub zero_fill: u64,
    /// Cost of a segmentation violation.
    pub segv: u64,
    /// Cost of a protection violation.
    pub segprot: u64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            read_write: constants::COST_READ_WRITE,
            context_switch: constants::COST_CONTEXT_SWITCH,
            map: constants::COST_MAP,
            unmap: constants::COST_UNMAP,
            page_in: constants::COST_PAGE_IN,
            page_out: constants::COST_PAGE_OUT,
            file_in: constants::COST_FILE_IN,
            file_out: constants::COST_FILE_OUT,
            zero_fill: constants::COST_ZERO_FILL,
            segv: constants::COST_SEGV,
            segprot: constants::COST_SEGPROT,
        }
    }
}

/// Root simulator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replacement algorithm wired into the engine at construction.
    pub algorithm: Algorithm,
    /// Enabled outputs.
    pub output: OutputOptions,
    /// Physical frame pool size.
    pub num_frames: usize,
    /// Cost weights charged by the engine.
    pub costs: CostModel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            output: OutputOptions::default(),
            num_frames: 16,
            costs: CostModel::default(),
        }
    }
}

impl Config {
    /// Deserializes a configuration from JSON, filling missing fields from
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the JSON does not describe a
    /// configuration.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validates the configuration before any simulation state is built.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] when the frame pool size is
    /// zero or exceeds [`constants::MAX_FRAMES`].
    pub fn validate(&self) -> Result<(), SimError> {
        if !(1..=constants::MAX_FRAMES).contains(&self.num_frames) {
            return Err(SimError::InvalidFrameCount(self.num_frames));
        }
        Ok(())
    }
}
