//! PIC disassembler.
//!
//! Decodes 8-bit PIC instruction words with [`picdis_isa`] and renders them
//! as assembler text. [`Disassembler`] drives one run over a word stream;
//! [`disassemble_file`] wires it to the record readers of [`picdis_hex`].

mod config;
mod disasm;
mod error;
pub mod format;

pub use config::*;
pub use disasm::*;
pub use error::{Error, Result};

pub use picdis_hex::FileType;
pub use picdis_isa::Architecture;
