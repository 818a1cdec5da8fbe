//! # Property-Based Tests
//!
//! Generated traces over two processes drive every policy through the
//! global invariants no particular workload should be able to break.

use proptest::prelude::*;
use vmsim_core::config::Algorithm;
use vmsim_core::sim::Instruction;

use crate::common::{assert_mappings_agree, output, run, two_processes};

const ALGORITHMS: [Algorithm; 6] = [
    Algorithm::Fifo,
    Algorithm::SecondChance,
    Algorithm::Random,
    Algorithm::Nru,
    Algorithm::Clock,
    Algorithm::Aging,
];

const RANDOM_TABLE: &[u64] = &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3];

/// Traces always open with a context switch; operands stay inside the
/// processes' `[0,9]` VMAs, so every access is legal.
fn trace_strategy() -> impl Strategy<Value = Vec<Instruction>> {
    proptest::collection::vec(
        prop_oneof![
            (0usize..2).prop_map(Instruction::ContextSwitch),
            (0usize..10).prop_map(Instruction::Read),
            (0usize..10).prop_map(Instruction::Write),
        ],
        0..120,
    )
    .prop_map(|mut trace| {
        trace.insert(0, Instruction::ContextSwitch(0));
        trace
    })
}

proptest! {
    #[test]
    fn maps_balance_unmaps_plus_frames_ever_used(
        trace in trace_strategy(),
        num_frames in 1usize..5,
        algorithm_index in 0usize..6,
    ) {
        let algorithm = ALGORITHMS[algorithm_index];
        let engine = run(algorithm, num_frames, two_processes(), RANDOM_TABLE, &trace);

        let maps: u64 = engine.processes().iter().map(|p| p.stats.maps).sum();
        let unmaps: u64 = engine.processes().iter().map(|p| p.stats.unmaps).sum();
        let ever_used = engine
            .frames()
            .iter()
            .filter(|frame| frame.owner.is_some())
            .count() as u64;

        prop_assert_eq!(maps, unmaps + ever_used);
        assert_mappings_agree(&engine);
    }

    #[test]
    fn generated_traces_replay_identically(
        trace in trace_strategy(),
        num_frames in 1usize..5,
        algorithm_index in 0usize..6,
    ) {
        let algorithm = ALGORITHMS[algorithm_index];
        let first = output(run(algorithm, num_frames, two_processes(), RANDOM_TABLE, &trace));
        let second = output(run(algorithm, num_frames, two_processes(), RANDOM_TABLE, &trace));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cost_is_never_below_the_per_access_floor(
        trace in trace_strategy(),
        num_frames in 1usize..5,
        algorithm_index in 0usize..6,
    ) {
        let algorithm = ALGORITHMS[algorithm_index];
        let engine = run(algorithm, num_frames, two_processes(), RANDOM_TABLE, &trace);
        // Every instruction charges at least its base weight.
        prop_assert!(engine.total_cost() >= engine.instructions());
    }
}
