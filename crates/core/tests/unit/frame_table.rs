//! # Frame Table Tests
//!
//! Verifies the pool's sole allocation primitive: lowest-free-index scan
//! with no side effects.

use vmsim_core::vm::FrameTable;

use crate::common::claim;

#[test]
fn new_pool_is_all_free() {
    let frames = FrameTable::new(4);
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|frame| frame.owner.is_none()));
}

#[test]
fn allocates_lowest_free_index() {
    let mut frames = FrameTable::new(4);
    assert_eq!(frames.allocate_free(), Some(0));

    // Allocation has no side effect; the caller marks ownership.
    assert_eq!(frames.allocate_free(), Some(0));

    claim(&mut frames, 0, 0, 0);
    assert_eq!(frames.allocate_free(), Some(1));

    claim(&mut frames, 1, 0, 1);
    claim(&mut frames, 3, 0, 3);
    // Lowest free index wins, not insertion order.
    assert_eq!(frames.allocate_free(), Some(2));
}

#[test]
fn full_pool_has_no_free_frame() {
    let mut frames = FrameTable::new(2);
    claim(&mut frames, 0, 0, 0);
    claim(&mut frames, 1, 0, 1);
    assert_eq!(frames.allocate_free(), None);
}

#[test]
fn freed_frame_becomes_allocatable_again() {
    let mut frames = FrameTable::new(2);
    claim(&mut frames, 0, 0, 0);
    claim(&mut frames, 1, 0, 1);
    frames[0].owner = None;
    assert_eq!(frames.allocate_free(), Some(0));
}

#[test]
fn frames_keep_stable_indices() {
    let frames = FrameTable::new(3);
    for (expected, frame) in frames.iter().enumerate() {
        assert_eq!(frame.index, expected);
    }
}
