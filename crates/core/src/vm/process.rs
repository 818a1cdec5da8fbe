//! Process Record.
//!
//! A process owns its page table (fixed size, one entry per virtual page),
//! its VMA list, and its accumulated statistics. Processes are created once
//! from the input declarations and live for the whole run.

use crate::common::constants::PAGE_TABLE_SIZE;
use crate::stats::ProcStats;

use super::pte::PageTableEntry;
use super::vma::Vma;

/// One simulated process.
#[derive(Debug, Clone)]
pub struct Process {
    /// Process id; equals the position in the declaration order.
    pub pid: usize,
    /// Legal virtual ranges, in declaration order.
    pub vmas: Vec<Vma>,
    /// Fixed-size page table, one entry per virtual page, created zeroed.
    pub page_table: Vec<PageTableEntry>,
    /// Statistics accumulated over the run.
    pub stats: ProcStats,
}

impl Process {
    /// Creates a process with a zeroed page table over the given VMA list.
    #[must_use]
    pub fn new(pid: usize, vmas: Vec<Vma>) -> Self {
        Self {
            pid,
            vmas,
            page_table: vec![PageTableEntry::default(); PAGE_TABLE_SIZE],
            stats: ProcStats::default(),
        }
    }

    /// Finds the VMA covering `vpage`, scanning in declaration order.
    ///
    /// # Returns
    ///
    /// `None` when no VMA covers the page — the access is a segmentation
    /// violation.
    #[must_use]
    pub fn find_vma(&self, vpage: usize) -> Option<&Vma> {
        self.vmas.iter().find(|vma| vma.contains(vpage))
    }
}
