//! Page Replacement Policies.
//!
//! Implements the algorithms for selecting the frame that services a page
//! fault, evicting a victim when the pool is full.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `SecondChance`: FIFO that skips recently referenced pages once.
//! - `Random`: Random selection over the whole pool.
//! - `Nru`: Not Recently Used, with periodic referenced-bit sweeps.
//! - `Clock`: Circular scan with a rotating hand.
//! - `Aging`: Per-frame decay counters.
//!
//! Every policy prefers a free frame over any eviction: selection always
//! starts with [`FrameTable::allocate_free`] and only runs the eviction
//! algorithm when the pool is fully occupied.

use crate::config::Algorithm;
use crate::rng::RandomSource;
use crate::vm::{FrameTable, Process};

/// First-In, First-Out replacement policy.
pub mod fifo;

/// FIFO with a second chance for referenced pages.
pub mod second_chance;

/// Random replacement policy.
pub mod random;

/// Not Recently Used replacement policy.
pub mod nru;

/// Clock (circular second chance) replacement policy.
pub mod clock;

/// Aging-counter replacement policy.
pub mod aging;

pub use aging::AgingPolicy;
pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use nru::NruPolicy;
pub use random::RandomPolicy;
pub use second_chance::SecondChancePolicy;

/// Trait for page replacement policies.
///
/// Defines the single selection operation the engine calls on every fault.
pub trait ReplacementPolicy {
    /// Selects the frame that will hold the faulting page.
    ///
    /// Never fails: a free frame is returned when one exists, otherwise the
    /// policy's eviction algorithm picks a victim among the owned frames.
    /// The caller unmaps the previous owner (if any) and records the new
    /// ownership; the policy only maintains its private bookkeeping.
    ///
    /// # Arguments
    ///
    /// * `processes` - All processes; policies read and clear the
    ///   referenced/modified bits of the pages currently mapped.
    /// * `frames` - The frame pool, scanned in index order.
    /// * `rng` - The shared random source; randomized policies draw from it
    ///   exactly once per decision.
    fn select_frame(
        &mut self,
        processes: &mut [Process],
        frames: &mut FrameTable,
        rng: &mut RandomSource,
    ) -> usize;
}

/// Builds the policy selected by the configuration.
///
/// Called once at engine construction; the variant set is closed.
#[must_use]
pub fn build(algorithm: Algorithm, num_frames: usize) -> Box<dyn ReplacementPolicy> {
    match algorithm {
        Algorithm::Fifo => Box::new(FifoPolicy::new()),
        Algorithm::SecondChance => Box::new(SecondChancePolicy::new()),
        Algorithm::Random => Box::new(RandomPolicy::new()),
        Algorithm::Nru => Box::new(NruPolicy::new()),
        Algorithm::Clock => Box::new(ClockPolicy::new()),
        Algorithm::Aging => Box::new(AgingPolicy::new(num_frames)),
    }
}
