//! Baseline (12-bit word) instruction set.

use super::{DATA_WORD, field};
use crate::OperandKind::{AbsoluteAddress, Bit, Literal, Register, RegisterDestSelector};
use crate::{InstructionDef, OperandField};

const F: OperandField = field(0x001F, Register);
const D: OperandField = field(0x0020, RegisterDestSelector);
const B: OperandField = field(0x00E0, Bit);
const K: OperandField = field(0x00FF, Literal);

const TRIS_F: OperandField = field(0x0007, Register);
const CALL_ADDR: OperandField = field(0x00FF, AbsoluteAddress);
const GOTO_ADDR: OperandField = field(0x01FF, AbsoluteAddress);

const FD: &[OperandField] = &[F, D];
const FB: &[OperandField] = &[F, B];

pub static BASELINE: &[InstructionDef] = &[
    InstructionDef::new("nop", 0x0000, &[]),
    InstructionDef::new("option", 0x0002, &[]),
    InstructionDef::new("sleep", 0x0003, &[]),
    InstructionDef::new("clrwdt", 0x0004, &[]),
    InstructionDef::new("tris", 0x0000, &[TRIS_F]),
    InstructionDef::new("movwf", 0x0020, &[F]),
    InstructionDef::new("clrw", 0x0040, &[]),
    InstructionDef::new("clrf", 0x0060, &[F]),
    InstructionDef::new("subwf", 0x0080, FD),
    InstructionDef::new("decf", 0x00C0, FD),
    InstructionDef::new("iorwf", 0x0100, FD),
    InstructionDef::new("andwf", 0x0140, FD),
    InstructionDef::new("xorwf", 0x0180, FD),
    InstructionDef::new("addwf", 0x01C0, FD),
    InstructionDef::new("movf", 0x0200, FD),
    InstructionDef::new("comf", 0x0240, FD),
    InstructionDef::new("incf", 0x0280, FD),
    InstructionDef::new("decfsz", 0x02C0, FD),
    InstructionDef::new("rrf", 0x0300, FD),
    InstructionDef::new("rlf", 0x0340, FD),
    InstructionDef::new("swapf", 0x0380, FD),
    InstructionDef::new("incfsz", 0x03C0, FD),
    InstructionDef::new("bcf", 0x0400, FB),
    InstructionDef::new("bsf", 0x0500, FB),
    InstructionDef::new("btfsc", 0x0600, FB),
    InstructionDef::new("btfss", 0x0700, FB),
    InstructionDef::new("retlw", 0x0800, &[K]),
    InstructionDef::new("call", 0x0900, &[CALL_ADDR]),
    InstructionDef::new("goto", 0x0A00, &[GOTO_ADDR]),
    InstructionDef::new("movlw", 0x0C00, &[K]),
    InstructionDef::new("iorlw", 0x0D00, &[K]),
    InstructionDef::new("andlw", 0x0E00, &[K]),
    InstructionDef::new("xorlw", 0x0F00, &[K]),
    DATA_WORD,
];
