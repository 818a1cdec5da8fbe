//! Random Replacement Policy.
//!
//! Ignores history entirely: when no free frame exists, one draw over the
//! full pool size picks the victim unconditionally, without inspecting any
//! referenced bit. The draw comes from the shared table-driven source, so
//! the choice is reproducible across runs.

use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

use super::ReplacementPolicy;

/// Random policy state (none beyond the shared random source).
#[derive(Debug, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for RandomPolicy {
    fn select_frame(
        &mut self,
        _processes: &mut [Process],
        frames: &mut FrameTable,
        rng: &mut RandomSource,
    ) -> usize {
        if let Some(free) = frames.allocate_free() {
            return free;
        }
        rng.next(frames.len())
    }
}
