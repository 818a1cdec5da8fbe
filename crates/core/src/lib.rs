//! Virtual-memory subsystem simulator library.
//!
//! This crate implements a deterministic simulator of an operating system's
//! paging layer with the following:
//! 1. **Data model:** Per-process page tables and VMA lists, plus a shared
//!    physical frame pool with inverse (frame → page) mappings.
//! 2. **Replacement policies:** Six interchangeable eviction strategies
//!    (FIFO, SecondChance, Random, NRU, Clock, Aging) behind one trait.
//! 3. **Engine:** The fault/load/evict/map state machine driven by an
//!    instruction trace, with exact per-operation cost accounting.
//! 4. **Simulation:** Input and random-table loaders, configuration, and
//!    report generation (trace annotations, table dumps, summaries).

/// Common types and constants (errors, cost weights, table sizes).
pub mod common;
/// Simulator configuration (algorithm selection, output options, cost model).
pub mod config;
/// Page replacement policies (FIFO, SecondChance, Random, NRU, Clock, Aging).
pub mod policies;
/// Deterministic table-driven random number source.
pub mod rng;
/// Simulation driver (input loader and the paging engine).
pub mod sim;
/// Per-process statistics and report formatting.
pub mod stats;
/// Virtual-memory data model (page tables, VMAs, processes, frames).
pub mod vm;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The paging engine; owns all simulation state and replays a trace.
pub use crate::sim::Engine;
