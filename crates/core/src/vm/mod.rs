//! Virtual-Memory Data Model.
//!
//! The structures the policies and the engine operate on:
//! 1. **Page table entries:** Per-(process, page) presence and status flags.
//! 2. **VMAs:** The legal virtual ranges of a process and their attributes.
//! 3. **Processes:** Page table + VMA list + accumulated statistics.
//! 4. **Frames:** The shared physical pool with its inverse mappings.
//!
//! Frames and page-table entries reference each other cyclically; both
//! directions are plain indices into fixed-size collections, never shared
//! pointers.

/// Physical frame pool and inverse mappings.
pub mod frame;
/// Process record (page table, VMA list, statistics).
pub mod process;
/// Page table entry flags.
pub mod pte;
/// Virtual memory area ranges.
pub mod vma;

pub use frame::{Frame, FrameTable};
pub use process::Process;
pub use pte::PageTableEntry;
pub use vma::Vma;
