//! Second-Chance Replacement Policy.
//!
//! FIFO over the same allocation-order queue, except that a head frame whose
//! page was referenced since its last inspection is spared once: the bit is
//! cleared and the frame moves to the tail. The first frame found with a
//! clear referenced bit is evicted (and also re-queued at the tail for its
//! next life).

use std::collections::VecDeque;

use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

use super::ReplacementPolicy;

/// Second-chance policy state.
#[derive(Debug, Default)]
pub struct SecondChancePolicy {
    /// Frames in allocation/visitation order; head is the next candidate.
    queue: VecDeque<usize>,
}

impl SecondChancePolicy {
    /// Creates a new second-chance policy instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for SecondChancePolicy {
    fn select_frame(
        &mut self,
        processes: &mut [Process],
        frames: &mut FrameTable,
        _rng: &mut RandomSource,
    ) -> usize {
        if let Some(free) = frames.allocate_free() {
            self.queue.push_back(free);
            return free;
        }
        // Terminates within two passes: the first pass clears every
        // referenced bit it skips.
        loop {
            let candidate = self.queue.pop_front().expect("full pool with empty queue");
            self.queue.push_back(candidate);
            let (pid, vpage) = frames[candidate]
                .owner
                .expect("eviction candidate must be owned");
            let pte = &mut processes[pid].page_table[vpage];
            if pte.referenced {
                pte.referenced = false;
            } else {
                return candidate;
            }
        }
    }
}
