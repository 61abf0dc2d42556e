//! Enhanced mid-range (14-bit word) instruction set.
//!
//! Superset of the mid-range set: adds shifts, carry/borrow arithmetic,
//! relative branches, bank/page selects, and the FSR-indirect `addfsr`,
//! `moviw` and `movwi` forms.

use super::{DATA_WORD, dont_care, field};
use crate::OperandKind::{
    AbsoluteAddress, Bit, FsrIndex, IncrementMode, IndfIndex, Literal, Register,
    RegisterDestSelector, RelativeAddress, SignedLiteral,
};
use crate::{InstructionDef, OperandField};

const F: OperandField = field(0x007F, Register);
const D: OperandField = field(0x0080, RegisterDestSelector);
const B: OperandField = field(0x0380, Bit);
const K: OperandField = field(0x00FF, Literal);
const ADDR: OperandField = field(0x07FF, AbsoluteAddress);

const TRIS_F: OperandField = field(0x0007, Register);
const CLRW_X: OperandField = dont_care(0x007F);
const BANK: OperandField = field(0x001F, Literal);
const PAGE: OperandField = field(0x007F, Literal);
const BRANCH: OperandField = field(0x01FF, RelativeAddress);

const FD: &[OperandField] = &[F, D];
const FB: &[OperandField] = &[F, B];

// `++FSRn`, `--FSRn`, `FSRn++`, `FSRn--`
const INDF_INC: &[OperandField] = &[field(0x0004, IndfIndex), field(0x0003, IncrementMode)];
const FSR_OFFSET: &[OperandField] = &[field(0x0040, FsrIndex), field(0x003F, SignedLiteral)];
// `k[FSRn]`
const INDF_OFFSET: &[OperandField] = &[field(0x0040, IndfIndex), field(0x003F, SignedLiteral)];

pub static ENHANCED: &[InstructionDef] = &[
    InstructionDef::new("nop", 0x0000, &[]),
    InstructionDef::new("reset", 0x0001, &[]),
    InstructionDef::new("return", 0x0008, &[]),
    InstructionDef::new("retfie", 0x0009, &[]),
    InstructionDef::new("callw", 0x000A, &[]),
    InstructionDef::new("brw", 0x000B, &[]),
    InstructionDef::new("moviw", 0x0010, INDF_INC),
    InstructionDef::new("movwi", 0x0018, INDF_INC),
    InstructionDef::new("movlb", 0x0020, &[BANK]),
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
    InstructionDef::new("movlw", 0x3000, &[K]),
    InstructionDef::new("addfsr", 0x3100, FSR_OFFSET),
    InstructionDef::new("movlp", 0x3180, &[PAGE]),
    InstructionDef::new("bra", 0x3200, &[BRANCH]),
    InstructionDef::new("retlw", 0x3400, &[K]),
    InstructionDef::new("lslf", 0x3500, FD),
    InstructionDef::new("lsrf", 0x3600, FD),
    InstructionDef::new("asrf", 0x3700, FD),
    InstructionDef::new("iorlw", 0x3800, &[K]),
    InstructionDef::new("andlw", 0x3900, &[K]),
    InstructionDef::new("xorlw", 0x3A00, &[K]),
    InstructionDef::new("subwfb", 0x3B00, FD),
    InstructionDef::new("sublw", 0x3C00, &[K]),
    InstructionDef::new("addwfc", 0x3D00, FD),
    InstructionDef::new("addlw", 0x3E00, &[K]),
    InstructionDef::new("moviw", 0x3F00, INDF_OFFSET),
    InstructionDef::new("movwi", 0x3F80, INDF_OFFSET),
    DATA_WORD,
];
