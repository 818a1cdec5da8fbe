//! Common types shared across the simulator.
//!
//! This module gathers the pieces every other module leans on:
//! 1. **Constants:** Fixed table sizes and the default cost weights.
//! 2. **Errors:** The crate error type covering all configuration failures.

/// Fixed simulation constants (cost weights, table sizes, policy intervals).
pub mod constants;

/// Simulator error type and conversions.
pub mod error;

pub use error::SimError;
