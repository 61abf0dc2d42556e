//! Instruction renderer and the running-address state machine.
//!
//! One line per instruction:
//!
//! ```text
//! [org marker] <column><opcode?><mnemonic> <operands>[ascii comment][destination comment]
//! ```
//!
//! The column is a label (`prefix` + zero-padded address) in label mode, a
//! space-padded `addr:` column otherwise, or nothing. In label mode every
//! address discontinuity opens a new `org` block.

use std::io::Write;

use picdis_isa::{DecodedInstr, IndirectMode, Operand};
use tracing::debug;

use crate::{Error, FormatConfig, LiteralRadix, Result};

/// Bytes reserved up front for one rendered line.
pub const LINE_CAPACITY: usize = 96;

/// Per-run formatter state: the last address emitted in label mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatterState {
    last_address: Option<u32>,
    origins: usize,
}

impl FormatterState {
    pub const fn new() -> Self {
        Self { last_address: None, origins: 0 }
    }

    /// Advance to `address`. Returns `true` when it does not directly follow
    /// the previous one, i.e. an origin marker is due.
    pub const fn advance(&mut self, address: u32) -> bool {
        let discontinuous = match self.last_address {
            Some(last) => last.wrapping_add(1) != address,
            None => true,
        };
        self.last_address = Some(address);
        if discontinuous {
            self.origins += 1;
        }
        discontinuous
    }

    /// Number of origin markers emitted so far.
    pub const fn origins(&self) -> usize {
        self.origins
    }
}

/// Absolute target of a relative operand.
pub const fn relative_target(address: u32, offset: i32) -> u32 {
    address.wrapping_add_signed(offset).wrapping_add(1)
}

/// Render `instr` as one line (preceded by an origin marker if due) into `out`.
pub fn render<W: Write>(
    out: &mut W,
    instr: &DecodedInstr,
    config: &FormatConfig,
    state: &mut FormatterState,
) -> Result<()> {
    let operands = instr.operands()?;
    write_line(out, instr, &operands, config, state).map_err(Error::Write)
}

fn write_line<W: Write>(
    out: &mut W,
    instr: &DecodedInstr,
    operands: &[Operand],
    config: &FormatConfig,
    state: &mut FormatterState,
) -> std::io::Result<()> {
    let width = config.address_width;

    if let Some(prefix) = config.label_prefix() {
        if state.advance(instr.address) {
            debug!(address = instr.address, "origin");
            write!(out, "\norg 0x{:0width$X}\n", instr.address)?;
        }
        write!(out, "{prefix}{:0width$X}\t", instr.address)?;
    } else if config.flags.address_column() {
        write!(out, "{:4X}:\t", instr.address)?;
    } else {
        out.write_all(b"\t")?;
    }

    if config.flags.original_opcode() {
        write!(out, "{:04X}\t", instr.opcode)?;
    }
    write!(out, "{} ", instr.mnemonic())?;

    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.write_all(b", ")?;
        }
        write_operand(out, *operand, instr.address, config)?;
    }

    if config.flags.literal_ascii_comment() {
        let literal = operands.iter().find_map(|op| match op {
            Operand::Literal(v) => Some(*v),
            _ => None,
        });
        if let Some(value) = literal {
            out.write_all(b" \t; '")?;
            out.write_all(&[value.to_le_bytes()[0]])?;
            out.write_all(b"'")?;
        }
    }

    if config.flags.destination_comment() {
        let offset = operands.iter().find_map(|op| match op {
            Operand::RelativeAddress(v) => Some(*v),
            _ => None,
        });
        if let Some(offset) = offset {
            write!(out, "  \t; 0x{:X}", relative_target(instr.address, offset))?;
        }
    }

    out.write_all(b"\n")
}

fn write_operand<W: Write>(
    out: &mut W,
    operand: Operand,
    address: u32,
    config: &FormatConfig,
) -> std::io::Result<()> {
    let width = config.address_width;
    match operand {
        Operand::Register(v) => write!(out, "0x{v:02X}"),
        Operand::Destination(f) => out.write_all(if f { b"F" } else { b"W" }),
        Operand::Bit(v) | Operand::FsrIndex(v) | Operand::SignedLiteral(v) => write!(out, "{v}"),
        Operand::Literal(v) => match config.radix {
            LiteralRadix::Hex => write!(out, "0x{v:X}"),
            LiteralRadix::Bin => write!(out, "b'{:08b}'", v & 0xFF),
            LiteralRadix::Dec => write!(out, "{v}"),
        },
        Operand::AbsoluteAddress(v) => match config.label_prefix() {
            Some(prefix) => write!(out, "{prefix}{v:0width$X}"),
            None => write!(out, "0x{v:0width$X}"),
        },
        Operand::WordData(v) => write!(out, "0x{v:0width$X}"),
        Operand::RelativeAddress(v) => match config.label_prefix() {
            Some(prefix) => write!(out, "{prefix}{:0width$X}", relative_target(address, v)),
            None if v > 0 => write!(out, ".+{v}"),
            None => write!(out, ".{v}"),
        },
        Operand::Indirect { fsr, mode } => match mode {
            IndirectMode::PreIncrement => write!(out, "++INDF{fsr}"),
            IndirectMode::PreDecrement => write!(out, "--INDF{fsr}"),
            IndirectMode::PostIncrement => write!(out, "INDF{fsr}++"),
            IndirectMode::PostDecrement => write!(out, "INDF{fsr}--"),
            IndirectMode::Offset(k) => write!(out, "{k}[INDF{fsr}]"),
        },
    }
}
