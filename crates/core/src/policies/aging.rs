//! Aging Replacement Policy.
//!
//! Keeps one 32-bit counter per frame index. On every replacement request
//! each owned frame's counter shifts right one bit, the page's referenced
//! bit lands in the most significant position, and the bit is cleared. The
//! frame with the numerically smallest counter is evicted (lowest index on
//! ties) and its counter resets to zero.

use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

use super::ReplacementPolicy;

/// Aging policy state.
#[derive(Debug)]
pub struct AgingPolicy {
    /// One decay counter per frame index.
    ages: Vec<u32>,
}

impl AgingPolicy {
    /// Creates a new aging policy instance for a pool of `num_frames`.
    #[must_use]
    pub fn new(num_frames: usize) -> Self {
        Self {
            ages: vec![0; num_frames],
        }
    }
}

impl ReplacementPolicy for AgingPolicy {
    fn select_frame(
        &mut self,
        processes: &mut [Process],
        frames: &mut FrameTable,
        _rng: &mut RandomSource,
    ) -> usize {
        if let Some(free) = frames.allocate_free() {
            return free;
        }

        for frame in frames.iter() {
            if let Some((pid, vpage)) = frame.owner {
                let pte = &mut processes[pid].page_table[vpage];
                self.ages[frame.index] =
                    (u32::from(pte.referenced) << 31) | (self.ages[frame.index] >> 1);
                pte.referenced = false;
            }
        }

        // Strict comparison during an index-order scan keeps the lowest
        // frame index on ties.
        let mut best: Option<(usize, u32)> = None;
        for frame in frames.iter() {
            if frame.owner.is_some() {
                let age = self.ages[frame.index];
                if best.is_none_or(|(_, lowest)| age < lowest) {
                    best = Some((frame.index, age));
                }
            }
        }
        let (victim, _) = best.expect("full pool with no owned frames");
        self.ages[victim] = 0;
        victim
    }
}
