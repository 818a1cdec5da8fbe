//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the frame that was allocated earliest, regardless of
//! how recently its page was accessed. Frames enter the queue when first
//! allocated; an evicted frame re-enters at the tail, becoming the newest
//! entry again once reused.

use std::collections::VecDeque;

use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

use super::ReplacementPolicy;

/// FIFO policy state.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    /// Frames in allocation order; head is the next victim.
    queue: VecDeque<usize>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn select_frame(
        &mut self,
        _processes: &mut [Process],
        frames: &mut FrameTable,
        _rng: &mut RandomSource,
    ) -> usize {
        if let Some(free) = frames.allocate_free() {
            self.queue.push_back(free);
            return free;
        }
        // Every owned frame was queued on allocation, so a full pool
        // implies a non-empty queue.
        let victim = self.queue.pop_front().expect("full pool with empty queue");
        self.queue.push_back(victim);
        victim
    }
}
