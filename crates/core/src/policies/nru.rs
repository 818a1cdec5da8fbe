//! Not-Recently-Used (NRU) Replacement Policy.
//!
//! Classifies every owned frame by the referenced and modified bits of the
//! page it holds (`class = 2*R + M`) and evicts a random member of the
//! lowest non-empty class. Every tenth replacement request additionally
//! clears the referenced bit of every owned frame, modeling the periodic
//! sweep real kernels run off a timer rather than off faults.

use tracing::trace;

use crate::common::constants::NRU_RESET_INTERVAL;
use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

use super::ReplacementPolicy;

/// NRU policy state.
#[derive(Debug, Default)]
pub struct NruPolicy {
    /// Replacement requests since the last referenced-bit sweep.
    evictions: u64,
}

impl NruPolicy {
    /// Creates a new NRU policy instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for NruPolicy {
    fn select_frame(
        &mut self,
        processes: &mut [Process],
        frames: &mut FrameTable,
        rng: &mut RandomSource,
    ) -> usize {
        if let Some(free) = frames.allocate_free() {
            return free;
        }

        // Classify in frame-index order so the intra-class order (and with
        // it the random pick) is stable across runs.
        let mut classes: [Vec<usize>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        for frame in frames.iter() {
            if let Some((pid, vpage)) = frame.owner {
                let class = processes[pid].page_table[vpage].nru_class();
                classes[class].push(frame.index);
            }
        }

        let victim = classes
            .iter()
            .find(|class| !class.is_empty())
            .map(|class| class[rng.next(class.len())])
            .expect("full pool with no owned frames");

        // The sweep runs after classification, so this request's classes
        // were built from the pre-sweep bits.
        self.evictions += 1;
        if self.evictions == NRU_RESET_INTERVAL {
            self.evictions = 0;
            trace!("clearing referenced bits of all owned frames");
            for frame in frames.iter() {
                if let Some((pid, vpage)) = frame.owner {
                    processes[pid].page_table[vpage].referenced = false;
                }
            }
        }

        victim
    }
}
