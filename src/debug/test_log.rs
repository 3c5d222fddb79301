// nestest log comparator
//
// Loads a golden per-instruction log (nestest.log format) and verifies the
// CPU against it one instruction at a time. Each line carries the PC, the
// instruction bytes and the register file before the instruction executes:
//
// ```text
// C000  4C F5 C5  JMP $C5F5    A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
// ```
//
// PC, A, X, Y, P and SP are always compared; the PPU position and cycle
// counter only in strict mode.

use crate::bus::Bus;
use crate::cpu::Cpu;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// The comparable fields of one golden-log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFields {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub sp: u8,
    /// PPU scanline, when the log carries one
    pub ppu_line: Option<u16>,
    /// PPU dot, when the log carries one
    pub ppu_dot: Option<u16>,
    /// CPU cycle counter, when the log carries one
    pub cyc: Option<u64>,
}

/// Test-log failure: a malformed log or a divergence from it
#[derive(Debug)]
pub enum TraceError {
    /// A golden-log line could not be parsed
    Malformed { line: usize },
    /// The CPU diverged from the golden log
    Divergence {
        /// 1-based instruction number
        instruction: usize,
        /// Register or counter that differed
        field: &'static str,
        expected: u64,
        actual: u64,
    },
    /// The golden log could not be read
    Io(io::Error),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Malformed { line } => {
                write!(f, "malformed golden log at line {}", line)
            }
            TraceError::Divergence {
                instruction,
                field,
                expected,
                actual,
            } => write!(
                f,
                "divergence at instruction {}: {} expected {:X}, got {:X}",
                instruction, field, expected, actual
            ),
            TraceError::Io(err) => write!(f, "failed to read golden log: {}", err),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<io::Error> for TraceError {
    fn from(err: io::Error) -> Self {
        TraceError::Io(err)
    }
}

/// A parsed golden log plus the comparison policy
pub struct TraceLog {
    lines: Vec<LogFields>,
    strict: bool,
}

impl TraceLog {
    /// Load and parse a golden log from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TraceError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a golden log from a string
    pub fn parse(contents: &str) -> Result<Self, TraceError> {
        let mut lines = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields =
                parse_line(line).ok_or(TraceError::Malformed { line: index + 1 })?;
            lines.push(fields);
        }
        Ok(TraceLog {
            lines,
            strict: false,
        })
    }

    /// Also compare the PPU position and cycle counter
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Number of instructions in the log
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The parsed fields for one instruction, if in range
    pub fn fields(&self, index: usize) -> Option<&LogFields> {
        self.lines.get(index)
    }

    /// Verify the CPU (and in strict mode the PPU) against line `index`
    ///
    /// Call before executing the instruction, mirroring how the golden
    /// log was captured.
    pub fn verify(&self, index: usize, cpu: &Cpu, bus: &Bus) -> Result<(), TraceError> {
        let expected = match self.lines.get(index) {
            Some(fields) => fields,
            None => return Ok(()),
        };
        let instruction = index + 1;

        check(instruction, "PC", expected.pc as u64, cpu.pc as u64)?;
        check(instruction, "A", expected.a as u64, cpu.a as u64)?;
        check(instruction, "X", expected.x as u64, cpu.x as u64)?;
        check(instruction, "Y", expected.y as u64, cpu.y as u64)?;
        check(instruction, "P", expected.p as u64, cpu.status as u64)?;
        check(instruction, "SP", expected.sp as u64, cpu.sp as u64)?;

        if self.strict {
            if let Some(cyc) = expected.cyc {
                check(instruction, "CYC", cyc, cpu.total_cycles)?;
            }
            if let Some(line) = expected.ppu_line {
                check(instruction, "PPU line", line as u64, bus.ppu().line() as u64)?;
            }
            if let Some(dot) = expected.ppu_dot {
                check(instruction, "PPU dot", dot as u64, bus.ppu().dot() as u64)?;
            }
        }

        Ok(())
    }
}

fn check(
    instruction: usize,
    field: &'static str,
    expected: u64,
    actual: u64,
) -> Result<(), TraceError> {
    if expected != actual {
        return Err(TraceError::Divergence {
            instruction,
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Parse one golden-log line into its comparable fields
fn parse_line(line: &str) -> Option<LogFields> {
    let pc = u16::from_str_radix(line.get(0..4)?, 16).ok()?;

    let a = hex_field(line, "A:")?;
    let x = hex_field(line, "X:")?;
    let y = hex_field(line, "Y:")?;
    let p = hex_field(line, "P:")?;
    let sp = hex_field(line, "SP:")?;

    let (ppu_line, ppu_dot) = match line.find("PPU:") {
        Some(pos) => {
            let rest = &line[pos + 4..];
            let comma = rest.find(',')?;
            let first = rest[..comma].trim().parse::<u16>().ok()?;
            let after_comma = rest[comma + 1..].trim_start();
            let end = after_comma.find(' ').unwrap_or(after_comma.len());
            let second = after_comma[..end].parse::<u16>().ok()?;
            (Some(first), Some(second))
        }
        None => (None, None),
    };

    let cyc = match line.find("CYC:") {
        Some(pos) => Some(line[pos + 4..].trim().parse::<u64>().ok()?),
        None => None,
    };

    Some(LogFields {
        pc,
        a,
        x,
        y,
        p,
        sp,
        ppu_line,
        ppu_dot,
        cyc,
    })
}

/// Two hex digits following `tag`
fn hex_field(line: &str, tag: &str) -> Option<u8> {
    let pos = line.find(tag)?;
    let start = pos + tag.len();
    u8::from_str_radix(line.get(start..start + 2)?, 16).ok()
}
