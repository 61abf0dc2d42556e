//! Core types for the PIC instruction sets.

use std::fmt::{self, Display};
use std::str::FromStr;

/// Maximum number of operand fields per instruction.
pub const MAX_OPERANDS: usize = 3;

/// 8-bit PIC architecture family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// Baseline (12-bit instruction words).
    Baseline,
    /// Mid-range (14-bit instruction words).
    #[default]
    Midrange,
    /// Enhanced mid-range (14-bit instruction words, extended set).
    Enhanced,
    /// PIC18 (16-bit instruction words). No active catalog.
    Pic18,
}

impl Architecture {
    /// Architectures with an active catalog.
    pub const SUPPORTED: [Self; 3] = [Self::Baseline, Self::Midrange, Self::Enhanced];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Midrange => "midrange",
            Self::Enhanced => "enhanced",
            Self::Pic18 => "pic18",
        }
    }
}

impl Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "midrange" => Ok(Self::Midrange),
            "enhanced" => Ok(Self::Enhanced),
            "pic18" => Ok(Self::Pic18),
            _ => Err(format!("unknown 8-bit PIC architecture: {s}")),
        }
    }
}

/// Semantic kind of an operand field.
///
/// The kind decides whether the raw value is sign-recovered and how the
/// operand is rendered. `None` fields mark don't-care bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    None,
    Register,
    RegisterDestSelector,
    Bit,
    Literal,
    AbsoluteAddress,
    WordData,
    RelativeAddress,
    SignedLiteral,
    FsrIndex,
    IncrementMode,
    IndfIndex,
}

impl OperandKind {
    /// Whether raw values of this kind are two's-complement encoded.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::RelativeAddress | Self::SignedLiteral)
    }
}

/// One operand field of an instruction encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandField {
    /// Bits of the opcode occupied by this operand.
    pub mask: u16,
    pub kind: OperandKind,
}

impl OperandField {
    pub const fn new(mask: u16, kind: OperandKind) -> Self {
        Self { mask, kind }
    }

    /// Number of bits covered by the mask.
    pub const fn width(self) -> u32 {
        self.mask.count_ones()
    }
}

/// Catalog entry describing one instruction encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionDef {
    pub mnemonic: &'static str,
    /// Opcode bits after all operand fields are masked out.
    pub opcode: u16,
    /// Operand fields in rendering order.
    pub operands: &'static [OperandField],
}

impl InstructionDef {
    pub const fn new(
        mnemonic: &'static str,
        opcode: u16,
        operands: &'static [OperandField],
    ) -> Self {
        Self { mnemonic, opcode, operands }
    }

    /// Union of all operand masks, including don't-care fields.
    pub fn operand_mask(&self) -> u16 {
        self.operands.iter().fold(0, |acc, field| acc | field.mask)
    }

    /// Whether `word` is encoded by this instruction.
    #[inline]
    pub fn matches(&self, word: u16) -> bool {
        word & !self.operand_mask() == self.opcode
    }
}

/// Raw instruction word as read from a program file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssembledInstr {
    /// Word address (byte address / 2).
    pub address: u32,
    pub opcode: u16,
}

impl AssembledInstr {
    pub const fn new(address: u32, opcode: u16) -> Self {
        Self { address, opcode }
    }
}
