//! Typed operand view of a decoded instruction.
//!
//! Catalog entries describe operands as flat `(mask, kind)` fields. Some
//! fields only make sense together: an `IndfIndex` is always followed by
//! either an `IncrementMode` or a `SignedLiteral` offset that selects its
//! addressing syntax. [`DecodedInstr::operands`] folds such pairs into a single
//! [`Operand::Indirect`] and drops don't-care fields, so renderers match on one
//! closed enum instead of peeking at sibling positions.

use crate::{DecodedInstr, IsaError, OperandKind, Result};

/// FSR indirect addressing mode of `moviw` / `movwi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndirectMode {
    /// `++INDFn`
    PreIncrement,
    /// `--INDFn`
    PreDecrement,
    /// `INDFn++`
    PostIncrement,
    /// `INDFn--`
    PostDecrement,
    /// `k[INDFn]`
    Offset(i32),
}

impl IndirectMode {
    /// Mode from the two-bit `mm` field.
    pub const fn from_bits(bits: i32) -> Option<Self> {
        match bits {
            0 => Some(Self::PreIncrement),
            1 => Some(Self::PreDecrement),
            2 => Some(Self::PostIncrement),
            3 => Some(Self::PostDecrement),
            _ => None,
        }
    }
}

/// A renderable operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(i32),
    /// Destination selector: `false` = W, `true` = F.
    Destination(bool),
    Bit(i32),
    Literal(i32),
    AbsoluteAddress(i32),
    WordData(i32),
    /// Signed distance from the next instruction.
    RelativeAddress(i32),
    SignedLiteral(i32),
    FsrIndex(i32),
    Indirect { fsr: i32, mode: IndirectMode },
}

impl DecodedInstr {
    /// Group the raw fields into renderable operands.
    ///
    /// Fails with [`IsaError::UnknownOperand`] when an `IndfIndex`,
    /// `SignedLiteral` or `IncrementMode` field sits outside the pairing it
    /// belongs to; that indicates an inconsistent catalog entry.
    pub fn operands(&self) -> Result<Vec<Operand>> {
        let fields = self.def.operands;
        let kind_at = |index: usize| fields.get(index).map(|field| field.kind);
        let unknown = |index: usize| IsaError::UnknownOperand {
            mnemonic: self.def.mnemonic,
            index,
        };

        let mut operands = Vec::with_capacity(fields.len());
        for (index, (field, value)) in self.fields().enumerate() {
            let operand = match field.kind {
                OperandKind::None => continue,
                OperandKind::Register => Operand::Register(value),
                OperandKind::RegisterDestSelector => Operand::Destination(value != 0),
                OperandKind::Bit => Operand::Bit(value),
                OperandKind::Literal => Operand::Literal(value),
                OperandKind::AbsoluteAddress => Operand::AbsoluteAddress(value),
                OperandKind::WordData => Operand::WordData(value),
                OperandKind::RelativeAddress => Operand::RelativeAddress(value),
                OperandKind::FsrIndex => Operand::FsrIndex(value),
                OperandKind::IndfIndex => {
                    if index != 0 || fields.len() != 2 {
                        return Err(unknown(index));
                    }
                    let partner = self.values[1];
                    let mode = match kind_at(1) {
                        Some(OperandKind::IncrementMode) => {
                            IndirectMode::from_bits(partner).ok_or_else(|| unknown(1))?
                        }
                        Some(OperandKind::SignedLiteral) => IndirectMode::Offset(partner),
                        _ => return Err(unknown(1)),
                    };
                    Operand::Indirect { fsr: value, mode }
                }
                OperandKind::SignedLiteral => match (index, kind_at(0)) {
                    (1, Some(OperandKind::FsrIndex)) => Operand::SignedLiteral(value),
                    (1, Some(OperandKind::IndfIndex)) => continue,
                    _ => return Err(unknown(index)),
                },
                OperandKind::IncrementMode => match (index, kind_at(0)) {
                    (1, Some(OperandKind::IndfIndex)) => continue,
                    _ => return Err(unknown(index)),
                },
            };
            operands.push(operand);
        }
        Ok(operands)
    }
}
