//! Fixed Simulation Constants.
//!
//! This module defines the constants that shape every run. It includes:
//! 1. **Table sizes:** Virtual pages per process and the frame-pool cap.
//! 2. **Cost weights:** Default per-operation costs charged by the engine.
//! 3. **Policy parameters:** The NRU sweep interval and aging counter width.

/// Number of virtual pages in every process's page table.
pub const PAGE_TABLE_SIZE: usize = 64;

/// Maximum number of physical frames in the pool.
///
/// Frame indices must fit the page-table entry's frame field, which is
/// sized for 128 frames.
pub const MAX_FRAMES: usize = 128;

/// NRU clears all referenced bits on every Nth frame replacement request.
pub const NRU_RESET_INTERVAL: u64 = 10;

/// Width in bits of each aging counter.
pub const AGING_COUNTER_BITS: u32 = 32;

/// Default cost of a read or write access.
pub const COST_READ_WRITE: u64 = 1;

/// Default cost of a context switch.
pub const COST_CONTEXT_SWITCH: u64 = 121;

/// Default cost of mapping a page into a frame.
pub const COST_MAP: u64 = 400;

/// Default cost of unmapping a victim page from its frame.
pub const COST_UNMAP: u64 = 400;

/// Default cost of reloading a page from the swap device.
pub const COST_PAGE_IN: u64 = 3000;

/// Default cost of writing a dirty page to the swap device.
pub const COST_PAGE_OUT: u64 = 3000;

/// Default cost of reading a page from its backing file.
pub const COST_FILE_IN: u64 = 2500;

/// Default cost of writing a dirty page back to its backing file.
pub const COST_FILE_OUT: u64 = 2500;

/// Default cost of zero-filling a page with no backing content.
pub const COST_ZERO_FILL: u64 = 150;

/// Default cost of a segmentation violation (access outside every VMA).
pub const COST_SEGV: u64 = 240;

/// Default cost of a protection violation (write to a protected page).
pub const COST_SEGPROT: u64 = 300;
