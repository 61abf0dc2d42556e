use std::collections::TryReserveError;

use thiserror::Error;

/// Disassembler errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("ISA error: {0}")]
    Isa(#[from] picdis_isa::IsaError),
    #[error("Record error: {0}")]
    Record(#[from] picdis_hex::RecordError),
    #[error("Error reading program file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Error writing disassembly: {0}")]
    Write(#[source] std::io::Error),
    #[error("Error allocating formatting buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
