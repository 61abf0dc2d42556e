//! Mask-based operand extraction and the decoded instruction.

use crate::{InstructionDef, MAX_OPERANDS, OperandField};

/// Gather the bits of `word` selected by `mask` into a right-aligned value.
///
/// Mask bits need not be contiguous: the n-th set bit of `mask` (counting
/// from bit 0) becomes bit n of the result.
pub fn extract_field(word: u16, mask: u16) -> u16 {
    let mut result = 0u16;
    let mut out = 0;
    for bit in 0..16 {
        if mask & (1 << bit) != 0 {
            if word & (1 << bit) != 0 {
                result |= 1 << out;
            }
            out += 1;
        }
    }
    result
}

/// Decoded instruction with all operand values extracted and resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstr {
    /// Word address.
    pub address: u32,
    /// Original instruction word.
    pub opcode: u16,
    /// Matching catalog entry.
    pub def: &'static InstructionDef,
    /// Operand values, in `def.operands` order. Signed kinds are already
    /// sign-recovered; unused slots are zero.
    pub values: [i32; MAX_OPERANDS],
    /// Another instruction sharing this encoding. Not populated by the
    /// standard catalogs, which resolve every word to a single entry.
    pub alternate: Option<Box<DecodedInstr>>,
}

impl DecodedInstr {
    pub fn mnemonic(&self) -> &'static str {
        self.def.mnemonic
    }

    /// Operand fields paired with their values.
    pub fn fields(&self) -> impl Iterator<Item = (OperandField, i32)> + '_ {
        self.def.operands.iter().copied().zip(self.values)
    }

    /// Chain of equivalently-encoded alternates, starting after this one.
    pub fn alternates(&self) -> impl Iterator<Item = &DecodedInstr> {
        std::iter::successors(self.alternate.as_deref(), |instr| instr.alternate.as_deref())
    }
}
