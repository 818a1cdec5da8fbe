//! The Paging Engine.
//!
//! This module implements the fault/access state machine. It performs:
//! 1. **Dispatch:** One instruction at a time — context switches update the
//!    current-process pointer, reads and writes go through the access path.
//! 2. **Fault handling:** VMA validation, victim selection through the
//!    configured policy, victim unmap and flush, page load, and mapping.
//! 3. **Accounting:** A fixed cost weight per sub-event accumulated into a
//!    running total, plus per-process statistics.
//! 4. **Reporting:** Optional per-instruction annotations and the final
//!    table dumps and summary, all written to the engine's output sink.
//!
//! The replay is strictly sequential and deterministic: scan orders are
//! fixed (VMA declaration order, frame index order) and the random source
//! advances exactly one position per randomized decision.

use std::io::Write;

use tracing::trace;

use crate::common::SimError;
use crate::config::Config;
use crate::policies::{self, ReplacementPolicy};
use crate::rng::RandomSource;
use crate::stats;
use crate::vm::{FrameTable, Process};

use super::loader::Instruction;

/// The paging engine: all simulation state plus the output sink.
pub struct Engine<W: Write> {
    config: Config,
    policy: Box<dyn ReplacementPolicy>,
    processes: Vec<Process>,
    frames: FrameTable,
    rng: RandomSource,
    /// Current process, set by the first context switch.
    current: Option<usize>,
    ctx_switches: u64,
    inst_count: u64,
    cost: u64,
    out: W,
}

impl<W: Write> Engine<W> {
    /// Creates an engine over the declared processes.
    ///
    /// The replacement policy and the frame pool are built from the
    /// configuration; `out` receives all enabled simulation output.
    pub fn new(config: Config, processes: Vec<Process>, rng: RandomSource, out: W) -> Self {
        let policy = policies::build(config.algorithm, config.num_frames);
        let frames = FrameTable::new(config.num_frames);
        Self {
            config,
            policy,
            processes,
            frames,
            rng,
            current: None,
            ctx_switches: 0,
            inst_count: 0,
            cost: 0,
            out,
        }
    }

    /// Replays a whole trace, then emits the enabled reports.
    ///
    /// # Errors
    ///
    /// Propagates [`Engine::execute`] and output errors.
    pub fn run(&mut self, instructions: &[Instruction]) -> Result<(), SimError> {
        for &instruction in instructions {
            self.execute(instruction)?;
        }
        self.emit_reports()
    }

    /// Executes a single instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NoCurrentProcess`] on a read or write before any
    /// context switch, and propagates output write failures.
    pub fn execute(&mut self, instruction: Instruction) -> Result<(), SimError> {
        if self.config.output.trace {
            writeln!(
                self.out,
                "{}: ==> {} {}",
                self.inst_count,
                instruction.code(),
                instruction.operand()
            )?;
        }
        self.inst_count += 1;

        match instruction {
            Instruction::ContextSwitch(pid) => {
                self.current = Some(pid);
                self.ctx_switches += 1;
                self.cost += self.config.costs.context_switch;
                Ok(())
            }
            Instruction::Read(vpage) => self.access(vpage, false),
            Instruction::Write(vpage) => self.access(vpage, true),
        }
    }

    /// The read/write path: hit or fault, then access-bit updates.
    fn access(&mut self, vpage: usize, is_write: bool) -> Result<(), SimError> {
        let pid = self.current.ok_or(SimError::NoCurrentProcess)?;
        self.cost += self.config.costs.read_write;

        if !self.processes[pid].page_table[vpage].present && !self.handle_fault(pid, vpage)? {
            // Segmentation violation: the instruction is abandoned, no
            // bits are touched.
            return Ok(());
        }

        self.processes[pid].page_table[vpage].referenced = true;
        if is_write {
            if self.processes[pid].page_table[vpage].write_protect {
                self.processes[pid].stats.segprot += 1;
                self.cost += self.config.costs.segprot;
                if self.config.output.trace {
                    writeln!(self.out, " SEGPROT")?;
                }
            } else {
                self.processes[pid].page_table[vpage].modified = true;
            }
        }
        Ok(())
    }

    /// Services a page fault. Returns `false` when the access violates the
    /// process's VMAs and the instruction must be abandoned.
    fn handle_fault(&mut self, pid: usize, vpage: usize) -> Result<bool, SimError> {
        let Some(vma) = self.processes[pid].find_vma(vpage).copied() else {
            self.processes[pid].stats.segv += 1;
            self.cost += self.config.costs.segv;
            if self.config.output.trace {
                writeln!(self.out, "  SEGV")?;
            }
            return Ok(false);
        };

        trace!(pid, vpage, "page fault");
        {
            // First-fault initialization from the covering VMA.
            let pte = &mut self.processes[pid].page_table[vpage];
            pte.write_protect = vma.write_protected;
            pte.file_mapped = vma.file_mapped;
        }

        let frame = self
            .policy
            .select_frame(&mut self.processes, &mut self.frames, &mut self.rng);
        if let Some((victim_pid, victim_vpage)) = self.frames[frame].owner {
            self.evict(frame, victim_pid, victim_vpage)?;
        }

        self.load(pid, vpage)?;

        self.processes[pid].stats.maps += 1;
        self.cost += self.config.costs.map;
        let pte = &mut self.processes[pid].page_table[vpage];
        pte.present = true;
        pte.frame = frame;
        self.frames[frame].owner = Some((pid, vpage));
        if self.config.output.trace {
            writeln!(self.out, " MAP {frame}")?;
        }
        Ok(true)
    }

    /// Unmaps a victim page and flushes it if dirty.
    fn evict(&mut self, frame: usize, victim_pid: usize, victim_vpage: usize) -> Result<(), SimError> {
        trace!(frame, victim_pid, victim_vpage, "evicting");
        self.processes[victim_pid].page_table[victim_vpage].present = false;
        self.processes[victim_pid].stats.unmaps += 1;
        self.cost += self.config.costs.unmap;
        if self.config.output.trace {
            writeln!(self.out, " UNMAP {victim_pid}:{victim_vpage}")?;
        }

        if self.processes[victim_pid].page_table[victim_vpage].modified {
            if self.processes[victim_pid].page_table[victim_vpage].file_mapped {
                self.processes[victim_pid].stats.fouts += 1;
                self.cost += self.config.costs.file_out;
                if self.config.output.trace {
                    writeln!(self.out, " FOUT")?;
                }
            } else {
                self.processes[victim_pid].page_table[victim_vpage].paged_out = true;
                self.processes[victim_pid].stats.outs += 1;
                self.cost += self.config.costs.page_out;
                if self.config.output.trace {
                    writeln!(self.out, " OUT")?;
                }
            }
            self.processes[victim_pid].page_table[victim_vpage].modified = false;
        }
        Ok(())
    }

    /// Brings the faulting page into its frame: page-in when it has swap
    /// history, file-in when file-mapped, zero-fill otherwise.
    fn load(&mut self, pid: usize, vpage: usize) -> Result<(), SimError> {
        let pte = self.processes[pid].page_table[vpage];
        if pte.paged_out {
            self.processes[pid].stats.ins += 1;
            self.cost += self.config.costs.page_in;
            if self.config.output.trace {
                writeln!(self.out, " IN")?;
            }
        } else if pte.file_mapped {
            self.processes[pid].stats.fins += 1;
            self.cost += self.config.costs.file_in;
            if self.config.output.trace {
                writeln!(self.out, " FIN")?;
            }
        } else {
            self.processes[pid].stats.zeros += 1;
            self.cost += self.config.costs.zero_fill;
            if self.config.output.trace {
                writeln!(self.out, " ZERO")?;
            }
        }
        Ok(())
    }

    /// Emits the enabled final reports (page tables, frame table, summary).
    ///
    /// # Errors
    ///
    /// Propagates output write failures.
    pub fn emit_reports(&mut self) -> Result<(), SimError> {
        if self.config.output.page_table {
            stats::write_page_tables(&mut self.out, &self.processes)?;
        }
        if self.config.output.frame_table {
            stats::write_frame_table(&mut self.out, &self.frames)?;
        }
        if self.config.output.summary {
            stats::write_summary(
                &mut self.out,
                &self.processes,
                self.ctx_switches,
                self.inst_count,
                self.cost,
            )?;
        }
        Ok(())
    }

    /// The simulated processes.
    #[must_use]
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The frame pool.
    #[must_use]
    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// Context switches executed so far.
    #[must_use]
    pub fn context_switches(&self) -> u64 {
        self.ctx_switches
    }

    /// Instructions executed so far, context switches included.
    #[must_use]
    pub fn instructions(&self) -> u64 {
        self.inst_count
    }

    /// Accumulated cost so far.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.cost
    }

    /// Consumes the engine and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
