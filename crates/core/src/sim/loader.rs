//! Input Loading and Validation.
//!
//! This module parses the single input file driving a run. It performs:
//! 1. **Declarations:** A process count, then per process a VMA count and
//!    that many `start end write_protected file_mapped` lines. Lines
//!    beginning with `#` are skipped wherever a count is expected.
//! 2. **Trace:** The remaining lines are instructions `<op> <operand>` with
//!    op one of `c` (context switch), `r` (read), `w` (write); blank and
//!    `#` lines are ignored.
//! 3. **Validation:** Context-switch operands must name a declared process
//!    and read/write operands must fall inside the page table, so the
//!    engine never indexes out of bounds.

use std::fs;

use tracing::debug;

use crate::common::SimError;
use crate::common::constants::PAGE_TABLE_SIZE;
use crate::vm::{Process, Vma};

/// One trace instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Make the given process current.
    ContextSwitch(usize),
    /// Read from a virtual page of the current process.
    Read(usize),
    /// Write to a virtual page of the current process.
    Write(usize),
}

impl Instruction {
    /// The one-letter operation code used in trace output.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::ContextSwitch(_) => 'c',
            Self::Read(_) => 'r',
            Self::Write(_) => 'w',
        }
    }

    /// The operand: a process id for `c`, a virtual page for `r`/`w`.
    #[must_use]
    pub fn operand(&self) -> usize {
        match self {
            Self::ContextSwitch(operand) | Self::Read(operand) | Self::Write(operand) => *operand,
        }
    }
}

/// The parsed contents of an input file.
#[derive(Debug)]
pub struct LoadedInput {
    /// Declared processes, pid equal to declaration order.
    pub processes: Vec<Process>,
    /// The instruction trace, in file order.
    pub instructions: Vec<Instruction>,
}

/// Line cursor with 1-based numbering and comment skipping for count
/// positions.
struct Cursor<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    origin: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, origin: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            origin,
        }
    }

    fn error(&self, line: usize, message: String) -> SimError {
        SimError::Parse {
            path: self.origin.to_string(),
            line,
            message,
        }
    }

    /// Next raw line, or an error naming what was expected.
    fn next_line(&mut self, expected: &str) -> Result<(usize, &'a str), SimError> {
        match self.lines.next() {
            Some((index, line)) => Ok((index + 1, line)),
            None => Err(self.error(0, format!("unexpected end of file, expected {expected}"))),
        }
    }

    /// Next non-comment line parsed as a count.
    fn next_count(&mut self, expected: &str) -> Result<usize, SimError> {
        loop {
            let (number, line) = self.next_line(expected)?;
            if line.starts_with('#') {
                continue;
            }
            return line
                .trim()
                .parse()
                .map_err(|_| self.error(number, format!("invalid {expected} '{}'", line.trim())));
        }
    }
}

/// Parses declarations and trace from input text.
///
/// # Arguments
///
/// * `text` - The file contents.
/// * `origin` - Path used in error messages.
///
/// # Errors
///
/// Returns [`SimError::Parse`] on malformed lines or on trace operands
/// that fail validation against the declarations.
pub fn parse_input(text: &str, origin: &str) -> Result<LoadedInput, SimError> {
    let mut cursor = Cursor::new(text, origin);

    let num_processes = cursor.next_count("process count")?;
    let mut processes = Vec::with_capacity(num_processes);
    for pid in 0..num_processes {
        let num_vmas = cursor.next_count("VMA count")?;
        let mut vmas = Vec::with_capacity(num_vmas);
        for _ in 0..num_vmas {
            let (number, line) = cursor.next_line("VMA specification")?;
            vmas.push(parse_vma(&cursor, number, line)?);
        }
        processes.push(Process::new(pid, vmas));
    }

    let mut instructions = Vec::new();
    while let Some((index, line)) = cursor.lines.next() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        instructions.push(parse_instruction(&cursor, index + 1, line, processes.len())?);
    }

    debug!(
        processes = processes.len(),
        instructions = instructions.len(),
        "loaded input"
    );
    Ok(LoadedInput {
        processes,
        instructions,
    })
}

/// Reads and parses an input file.
///
/// # Errors
///
/// Returns [`SimError::Read`] when the file cannot be read, plus any
/// [`parse_input`] error.
pub fn load_input(path: &str) -> Result<LoadedInput, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_input(&text, path)
}

fn parse_vma(cursor: &Cursor<'_>, number: usize, line: &str) -> Result<Vma, SimError> {
    let mut fields = line.split_whitespace();
    let mut next_field = |name: &str| -> Result<usize, SimError> {
        let token = fields
            .next()
            .ok_or_else(|| cursor.error(number, format!("VMA specification missing {name}")))?;
        token
            .parse()
            .map_err(|_| cursor.error(number, format!("invalid VMA {name} '{token}'")))
    };
    let start_page = next_field("start page")?;
    let end_page = next_field("end page")?;
    let write_protected = next_field("write protection flag")? != 0;
    let file_mapped = next_field("file mapping flag")? != 0;
    if start_page > end_page || end_page >= PAGE_TABLE_SIZE {
        return Err(cursor.error(
            number,
            format!("VMA range {start_page}..={end_page} outside 0..{PAGE_TABLE_SIZE}"),
        ));
    }
    Ok(Vma {
        start_page,
        end_page,
        write_protected,
        file_mapped,
    })
}

fn parse_instruction(
    cursor: &Cursor<'_>,
    number: usize,
    line: &str,
    num_processes: usize,
) -> Result<Instruction, SimError> {
    let mut fields = line.split_whitespace();
    let op = fields
        .next()
        .ok_or_else(|| cursor.error(number, "missing operation".to_string()))?;
    let operand_token = fields
        .next()
        .ok_or_else(|| cursor.error(number, "missing operand".to_string()))?;
    let operand: usize = operand_token
        .parse()
        .map_err(|_| cursor.error(number, format!("invalid operand '{operand_token}'")))?;

    match op {
        "c" => {
            if operand >= num_processes {
                return Err(cursor.error(
                    number,
                    format!("context switch to undeclared process {operand}"),
                ));
            }
            Ok(Instruction::ContextSwitch(operand))
        }
        "r" | "w" => {
            if operand >= PAGE_TABLE_SIZE {
                return Err(cursor.error(
                    number,
                    format!("virtual page {operand} outside 0..{PAGE_TABLE_SIZE}"),
                ));
            }
            if op == "r" {
                Ok(Instruction::Read(operand))
            } else {
                Ok(Instruction::Write(operand))
            }
        }
        other => Err(cursor.error(number, format!("unknown operation '{other}'"))),
    }
}
