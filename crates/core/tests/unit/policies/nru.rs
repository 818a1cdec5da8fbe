//! # NRU Policy Tests

use vmsim_core::policies::{NruPolicy, ReplacementPolicy};
use vmsim_core::vm::{FrameTable, Process};

use crate::common::{claim, rng};

/// Four owned frames, one per NRU class: frame 0 in class 0 (R=0, M=0),
/// frame 1 in class 1 (M=1), frame 2 in class 2 (R=1), frame 3 in class 3.
fn one_frame_per_class() -> (FrameTable, Vec<Process>) {
    let mut frames = FrameTable::new(4);
    let mut processes = vec![Process::new(0, Vec::new())];
    for vpage in 0..4 {
        claim(&mut frames, vpage, 0, vpage);
        let pte = &mut processes[0].page_table[vpage];
        pte.present = true;
        pte.frame = vpage;
        pte.referenced = vpage >= 2;
        pte.modified = vpage % 2 == 1;
    }
    (frames, processes)
}

#[test]
fn lowest_class_wins() {
    let mut policy = NruPolicy::new();
    let (mut frames, mut processes) = one_frame_per_class();
    let mut source = rng(&[0]);

    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);
}

#[test]
fn classes_empty_from_below_fall_through() {
    let mut policy = NruPolicy::new();
    let (mut frames, mut processes) = one_frame_per_class();
    let mut source = rng(&[0]);

    // Promote the class-0 page; class 1 becomes the lowest non-empty.
    processes[0].page_table[0].referenced = true;
    processes[0].page_table[0].modified = true;
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 1);
}

#[test]
fn victim_is_drawn_randomly_within_the_class() {
    let mut policy = NruPolicy::new();
    let mut frames = FrameTable::new(3);
    let mut processes = vec![Process::new(0, Vec::new())];
    for vpage in 0..3 {
        claim(&mut frames, vpage, 0, vpage);
        processes[0].page_table[vpage].present = true;
        processes[0].page_table[vpage].frame = vpage;
    }

    // All three share class 0; the draw (value 1, bound 3) picks the
    // second frame in index order.
    let mut source = rng(&[1]);
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 1);
}

#[test]
fn every_tenth_call_sweeps_referenced_bits() {
    let mut policy = NruPolicy::new();
    let mut frames = FrameTable::new(2);
    let mut processes = vec![Process::new(0, Vec::new())];
    for vpage in 0..2 {
        claim(&mut frames, vpage, 0, vpage);
        processes[0].page_table[vpage].present = true;
        processes[0].page_table[vpage].frame = vpage;
        processes[0].page_table[vpage].referenced = true;
    }
    let mut source = rng(&[0]);

    for _ in 0..9 {
        let _ = policy.select_frame(&mut processes, &mut frames, &mut source);
    }
    assert!(
        processes[0].page_table[0].referenced && processes[0].page_table[1].referenced,
        "selection alone never clears bits"
    );

    let _ = policy.select_frame(&mut processes, &mut frames, &mut source);
    assert!(
        !processes[0].page_table[0].referenced && !processes[0].page_table[1].referenced,
        "the tenth request sweeps every owned frame"
    );
}

#[test]
fn free_frames_bypass_classification_and_the_draw() {
    let mut policy = NruPolicy::new();
    let mut frames = FrameTable::new(2);
    let mut processes = vec![Process::new(0, Vec::new())];
    let mut source = rng(&[1]);

    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 0);
    claim(&mut frames, 0, 0, 0);
    processes[0].page_table[0].present = true;

    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 1);
    claim(&mut frames, 1, 0, 1);
    processes[0].page_table[1].present = true;

    // The first eviction consumes the first table value: 1 % 2 = 1.
    assert_eq!(policy.select_frame(&mut processes, &mut frames, &mut source), 1);
}
