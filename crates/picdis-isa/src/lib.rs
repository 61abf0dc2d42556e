//! 8-bit PIC instruction set definitions and decoder.
//!
//! This crate holds the per-architecture instruction catalogs, the mask-based
//! opcode decoder, and the operand resolver that recovers signed values. Each
//! architecture's catalog is plain data under `catalog/`; a single decoder
//! walks whichever table the selected [`Architecture`] names.

pub mod catalog;
mod decode;
mod operand;
mod resolve;
mod types;

pub use catalog::Catalog;
pub use decode::*;
pub use operand::*;
pub use resolve::*;
pub use types::*;

use thiserror::Error;

/// Instruction decoding errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsaError {
    #[error("unsupported PIC architecture: {0}")]
    UnsupportedArchitecture(Architecture),
    #[error("unknown operand {index} for instruction {mnemonic}")]
    UnknownOperand { mnemonic: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, IsaError>;

/// Decode a single word for the given architecture.
///
/// This is a convenience wrapper around `Catalog::for_arch(arch)?.decode(instr)`.
pub fn decode(arch: Architecture, instr: AssembledInstr) -> Result<DecodedInstr> {
    Ok(Catalog::for_arch(arch)?.decode(instr))
}
