//! Page Table Entry.
//!
//! One record per (process, virtual page). Status bits are independent named
//! flags rather than packed ranges; each has the exact semantics the engine
//! and policies consume.

/// A single page-table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Page is currently mapped to a frame.
    pub present: bool,
    /// Writes to this page are protection violations. Copied from the
    /// owning VMA on the first fault.
    pub write_protect: bool,
    /// Page was written since it was last loaded or flushed.
    pub modified: bool,
    /// Page was accessed since the bit was last cleared by a policy.
    pub referenced: bool,
    /// Page has been written to the swap device before. May stay set while
    /// the page is present again, or while it is out.
    pub paged_out: bool,
    /// Page is backed by a mapped file. Copied from the owning VMA on the
    /// first fault.
    pub file_mapped: bool,
    /// Index of the mapped frame; meaningful iff `present`.
    pub frame: usize,
}

impl PageTableEntry {
    /// NRU priority class: `2 * referenced + modified`.
    ///
    /// Class 0 (neither bit) is evicted first, class 3 (both bits) last.
    #[must_use]
    pub fn nru_class(&self) -> usize {
        usize::from(self.referenced) * 2 + usize::from(self.modified)
    }
}
