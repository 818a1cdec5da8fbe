//! Simulation Driver.
//!
//! This module ties the data model and the policies together:
//! 1. **Loader:** Parses the combined declarations + trace input file.
//! 2. **Engine:** Replays the trace through the fault/access state machine
//!    and emits the configured reports.

/// The paging engine.
pub mod engine;
/// Input-file parsing and validation.
pub mod loader;

pub use engine::Engine;
pub use loader::{Instruction, LoadedInput};
