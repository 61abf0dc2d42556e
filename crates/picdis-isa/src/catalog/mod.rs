//! Per-architecture instruction catalogs.
//!
//! Each table is scanned in declaration order and the first matching entry
//! wins, so tighter encodings sit before looser ones sharing opcode bits.
//! Every table ends with [`DATA_WORD`], whose single operand covers all 16
//! bits; any word that nothing else claims is rendered as raw data.

mod baseline;
mod enhanced;
mod midrange;

pub use baseline::BASELINE;
pub use enhanced::ENHANCED;
pub use midrange::MIDRANGE;

use crate::{
    Architecture, AssembledInstr, DecodedInstr, InstructionDef, IsaError, MAX_OPERANDS,
    OperandField, OperandKind, Result, extract_field, resolve_value,
};

/// Catch-all pseudo-instruction for undecodable words.
pub const DATA_WORD: InstructionDef = InstructionDef::new("data", 0x0000, &[WORD]);

const WORD: OperandField = OperandField::new(0xFFFF, OperandKind::WordData);

// Field shorthands shared by the tables.
const fn field(mask: u16, kind: OperandKind) -> OperandField {
    OperandField::new(mask, kind)
}

const fn dont_care(mask: u16) -> OperandField {
    OperandField::new(mask, OperandKind::None)
}

/// Instruction catalog for one architecture.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [InstructionDef],
}

impl Catalog {
    /// Catalog for `arch`, or an error if the architecture has no active table.
    pub fn for_arch(arch: Architecture) -> Result<Self> {
        let entries = match arch {
            Architecture::Baseline => BASELINE,
            Architecture::Midrange => MIDRANGE,
            Architecture::Enhanced => ENHANCED,
            Architecture::Pic18 => return Err(IsaError::UnsupportedArchitecture(arch)),
        };
        Ok(Self { entries })
    }

    pub const fn entries(&self) -> &'static [InstructionDef] {
        self.entries
    }

    /// First entry in table order that encodes `word`.
    pub fn lookup(&self, word: u16) -> &'static InstructionDef {
        const FALLBACK: &InstructionDef = &DATA_WORD;
        self.entries
            .iter()
            .find(|def| def.matches(word))
            .unwrap_or(FALLBACK)
    }

    /// Decode an instruction word, extracting and resolving its operands.
    pub fn decode(&self, instr: AssembledInstr) -> DecodedInstr {
        let def = self.lookup(instr.opcode);
        let mut values = [0i32; MAX_OPERANDS];
        for (value, field) in values.iter_mut().zip(def.operands) {
            let raw = extract_field(instr.opcode, field.mask);
            *value = resolve_value(raw, *field);
        }
        DecodedInstr {
            address: instr.address,
            opcode: instr.opcode,
            def,
            values,
            alternate: None,
        }
    }
}
