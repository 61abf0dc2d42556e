//! Mid-range (14-bit word) instruction set.

use super::{DATA_WORD, dont_care, field};
use crate::OperandKind::{AbsoluteAddress, Bit, Literal, Register, RegisterDestSelector};
use crate::{InstructionDef, OperandField};

const F: OperandField = field(0x007F, Register);
const D: OperandField = field(0x0080, RegisterDestSelector);
const B: OperandField = field(0x0380, Bit);
const K: OperandField = field(0x00FF, Literal);
const ADDR: OperandField = field(0x07FF, AbsoluteAddress);

const TRIS_F: OperandField = field(0x0007, Register);
const NOP_X: OperandField = dont_care(0x0060);
const CLRW_X: OperandField = dont_care(0x007F);

const FD: &[OperandField] = &[F, D];
const FB: &[OperandField] = &[F, B];
const K_X1: &[OperandField] = &[K, dont_care(0x0100)];
const K_X2: &[OperandField] = &[K, dont_care(0x0300)];

pub static MIDRANGE: &[InstructionDef] = &[
    InstructionDef::new("nop", 0x0000, &[NOP_X]),
    InstructionDef::new("return", 0x0008, &[]),
    InstructionDef::new("retfie", 0x0009, &[]),
    InstructionDef::new("option", 0x0062, &[]),
    InstructionDef::new("sleep", 0x0063, &[]),
    InstructionDef::new("clrwdt", 0x0064, &[]),
    InstructionDef::new("tris", 0x0060, &[TRIS_F]),
    InstructionDef::new("movwf", 0x0080, &[F]),
    InstructionDef::new("clrw", 0x0100, &[CLRW_X]),
    InstructionDef::new("clrf", 0x0180, &[F]),
    InstructionDef::new("subwf", 0x0200, FD),
    InstructionDef::new("decf", 0x0300, FD),
    InstructionDef::new("iorwf", 0x0400, FD),
    InstructionDef::new("andwf", 0x0500, FD),
    InstructionDef::new("xorwf", 0x0600, FD),
    InstructionDef::new("addwf", 0x0700, FD),
    InstructionDef::new("movf", 0x0800, FD),
    InstructionDef::new("comf", 0x0900, FD),
    InstructionDef::new("incf", 0x0A00, FD),
    InstructionDef::new("decfsz", 0x0B00, FD),
    InstructionDef::new("rrf", 0x0C00, FD),
    InstructionDef::new("rlf", 0x0D00, FD),
    InstructionDef::new("swapf", 0x0E00, FD),
    InstructionDef::new("incfsz", 0x0F00, FD),
    InstructionDef::new("bcf", 0x1000, FB),
    InstructionDef::new("bsf", 0x1400, FB),
    InstructionDef::new("btfsc", 0x1800, FB),
    InstructionDef::new("btfss", 0x1C00, FB),
    InstructionDef::new("call", 0x2000, &[ADDR]),
    InstructionDef::new("goto", 0x2800, &[ADDR]),
    InstructionDef::new("movlw", 0x3000, K_X2),
    InstructionDef::new("retlw", 0x3400, K_X2),
    InstructionDef::new("iorlw", 0x3800, &[K]),
    InstructionDef::new("andlw", 0x3900, &[K]),
    InstructionDef::new("xorlw", 0x3A00, &[K]),
    InstructionDef::new("sublw", 0x3C00, K_X1),
    InstructionDef::new("addlw", 0x3E00, K_X1),
    DATA_WORD,
];
