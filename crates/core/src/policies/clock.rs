//! Clock Replacement Policy.
//!
//! Second chance over a circular sequence instead of a queue: a hand walks
//! the allocated frames in a fixed circle, clearing referenced bits as it
//! passes, and evicts the first frame it finds with the bit already clear.
//! After an eviction the hand points just past the evicted slot.

use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

use super::ReplacementPolicy;

/// Clock policy state.
#[derive(Debug, Default)]
pub struct ClockPolicy {
    /// Frames in allocation order, treated as a circle.
    circle: Vec<usize>,
    /// Index into `circle` of the next frame to consider.
    hand: usize,
}

impl ClockPolicy {
    /// Creates a new clock policy instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn select_frame(
        &mut self,
        processes: &mut [Process],
        frames: &mut FrameTable,
        _rng: &mut RandomSource,
    ) -> usize {
        if let Some(free) = frames.allocate_free() {
            self.circle.push(free);
            return free;
        }
        // Terminates within one full revolution past the cleared bits.
        loop {
            let candidate = self.circle[self.hand];
            self.hand = (self.hand + 1) % self.circle.len();
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
