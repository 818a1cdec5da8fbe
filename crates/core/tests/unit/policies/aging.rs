//! # Aging Policy Tests

use vmsim_core::policies::{AgingPolicy, ReplacementPolicy};
use vmsim_core::vm::{FrameTable, Process};

use crate::common::{claim, rng};

fn filled(count: usize) -> (FrameTable, Vec<Process>) {
    let mut frames = FrameTable::new(count);
    let mut processes = vec![Process::new(0, Vec::new())];
    for vpage in 0..count {
        claim(&mut frames, vpage, 0, vpage);
        processes[0].page_table[vpage].present = true;
        processes[0].page_table[vpage].frame = vpage;
    }
    (frames, processes)
}

#[test]
fn zero_counters_tie_break_to_lowest_index() {
    let mut policy = AgingPolicy::new(2);
    let (mut frames, mut processes) = filled(2);
    let mut source = rng(&[0]);

    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);
}

#[test]
fn referenced_page_gains_the_top_bit_and_survives() {
    let mut policy = AgingPolicy::new(2);
    let (mut frames, mut processes) = filled(2);
    let mut source = rng(&[0]);

    processes[0].page_table[0].referenced = true;
    let victim = policy.select_frame(&mut processes, &mut frames, &mut source);

    assert_eq!(victim, 1, "the unreferenced page has the smaller counter");
    assert!(
        !processes[0].page_table[0].referenced,
        "the shift consumes the referenced bit"
    );
}

#[test]
fn counter_decays_to_zero_after_32_unreferenced_shifts() {
    let mut policy = AgingPolicy::new(2);
    let (mut frames, mut processes) = filled(2);
    let mut source = rng(&[0]);

    // One reference puts frame 0's counter at the top bit.
    processes[0].page_table[0].referenced = true;
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 1);

    // Each further request halves the counter; frame 1 (counter zero,
    // reset on every eviction) keeps losing until frame 0 reaches zero.
    for _ in 0..31 {
        assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 1);
    }

    // The 32nd shift clears the last bit: tie at zero, lowest index wins.
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);
}

#[test]
fn victim_counter_resets() {
    let mut policy = AgingPolicy::new(2);
    let (mut frames, mut processes) = filled(2);
    let mut source = rng(&[0]);

    // Both referenced: equal counters, frame 0 evicted and reset.
    processes[0].page_table[0].referenced = true;
    processes[0].page_table[1].referenced = true;
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);

    // Next request: frame 0 holds 0, frame 1 holds its decayed history.
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);
}

#[test]
fn only_owned_frames_age_or_get_evicted() {
    let mut policy = AgingPolicy::new(3);
    let mut frames = FrameTable::new(3);
    let mut processes = vec![Process::new(0, Vec::new())];
    let mut source = rng(&[0]);

    // Free frames are always preferred, no aging happens.
    processes[0].page_table[0].referenced = true;
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);
    assert!(processes[0].page_table[0].referenced, "free path leaves bits alone");
}
