//! Statistics and Report Formatting.
//!
//! This module tracks per-process counters and renders the final reports.
//! It provides:
//! 1. **Counters:** One `ProcStats` per process (maps, unmaps, I/O, faults).
//! 2. **Page-table dump:** Per-process presence and R/M/S flags.
//! 3. **Frame-table dump:** Each frame's current owner or `*` when free.
//! 4. **Summary:** Per-process counter lines plus the aggregate cost line.
//!
//! Counters are plain integers; the cost accounting lives in the engine and
//! is only rendered here.

use std::io::{self, Write};

use crate::vm::{FrameTable, Process};

/// Per-process event counters.
///
/// Counts are 64-bit: long traces overrun 32 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcStats {
    /// Victim pages unmapped from their frame.
    pub unmaps: u64,
    /// Pages mapped into a frame.
    pub maps: u64,
    /// Page-ins from the swap device.
    pub ins: u64,
    /// Page-outs to the swap device.
    pub outs: u64,
    /// File-ins from mapped files.
    pub fins: u64,
    /// File-outs to mapped files.
    pub fouts: u64,
    /// Pages zero-filled on first use.
    pub zeros: u64,
    /// Segmentation violations.
    pub segv: u64,
    /// Protection violations.
    pub segprot: u64,
}

/// Writes the final page-table dump, one line per process.
///
/// Pages that are not present show `#` when they have swap history and `*`
/// when they do not; present pages show `page:` followed by the R/M/S flags
/// with `-` for clear bits.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn write_page_tables<W: Write>(out: &mut W, processes: &[Process]) -> io::Result<()> {
    for process in processes {
        write!(out, "PT[{}]: ", process.pid)?;
        for (vpage, pte) in process.page_table.iter().enumerate() {
            if pte.present {
                write!(
                    out,
                    "{}:{}{}{} ",
                    vpage,
                    if pte.referenced { 'R' } else { '-' },
                    if pte.modified { 'M' } else { '-' },
                    if pte.paged_out { 'S' } else { '-' },
                )?;
            } else if pte.paged_out {
                write!(out, "# ")?;
            } else {
                write!(out, "* ")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the final frame-table dump: each frame's `pid:vpage` owner, or
/// `*` for a frame no virtual page currently maps.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn write_frame_table<W: Write>(out: &mut W, frames: &FrameTable) -> io::Result<()> {
    write!(out, "FT: ")?;
    for frame in frames {
        match frame.owner {
            Some((pid, vpage)) => write!(out, "{pid}:{vpage} ")?,
            None => write!(out, "* ")?,
        }
    }
    writeln!(out)
}

/// Writes the per-process statistics lines and the aggregate
/// `TOTALCOST` line (context switches, instruction count, total cost).
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn write_summary<W: Write>(
    out: &mut W,
    processes: &[Process],
    ctx_switches: u64,
    inst_count: u64,
    cost: u64,
) -> io::Result<()> {
    for process in processes {
        let stats = &process.stats;
        writeln!(
            out,
            "PROC[{}]: U={} M={} I={} O={} FI={} FO={} Z={} SV={} SP={}",
            process.pid,
            stats.unmaps,
            stats.maps,
            stats.ins,
            stats.outs,
            stats.fins,
            stats.fouts,
            stats.zeros,
            stats.segv,
            stats.segprot,
        )?;
    }
    writeln!(out, "TOTALCOST {ctx_switches} {inst_count} {cost}")
}
