//! Record-oriented program file readers.
//!
//! Reads Intel HEX and Motorola S-Record text into data records, then turns
//! the data bytes into little-endian 16-bit instruction words tagged with
//! their word address.

pub mod ihex;
mod reader;
pub mod srec;
mod words;

pub use reader::*;
pub use words::*;

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Record parsing errors.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("line {line}: invalid record: {reason}")]
    InvalidRecord { line: usize, reason: &'static str },
    #[error("line {line}: checksum mismatch (computed 0x{computed:02X}, record has 0x{stored:02X})")]
    Checksum { line: usize, computed: u8, stored: u8 },
    #[error("unable to recognize file type from its first character")]
    UnknownFileType,
    #[error("byte at word address 0x{0:X} has no partner to form an instruction word")]
    DanglingByte(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;

/// Program file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    /// Intel HEX (`:LLAAAATT...CC`).
    Ihex,
    /// Motorola S-Record (`S<t>...`).
    Srecord,
}

impl FileType {
    /// Guess the format from the first character of a record line.
    pub const fn from_lead_byte(byte: u8) -> Option<Self> {
        match byte {
            b':' => Some(Self::Ihex),
            b'S' => Some(Self::Srecord),
            _ => None,
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ihex => f.write_str("ihex"),
            Self::Srecord => f.write_str("srecord"),
        }
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ihex" => Ok(Self::Ihex),
            "srecord" => Ok(Self::Srecord),
            _ => Err(format!("unknown file type: {s}")),
        }
    }
}

/// A run of data bytes starting at a byte address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataRecord {
    pub address: u32,
    pub data: Vec<u8>,
}

/// One parsed record line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Data(DataRecord),
    /// End-of-file or termination record.
    End,
    /// Header, count, start address, or other record without program data.
    Skip(&'static str),
}

/// Decode pairs of hex digits into bytes.
pub(crate) fn decode_hex(text: &str, line: usize) -> Result<Vec<u8>> {
    let digits = text.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(RecordError::InvalidRecord { line, reason: "odd number of hex digits" });
    }
    digits
        .chunks(2)
        .map(|pair| Ok((nibble(pair[0], line)? << 4) | nibble(pair[1], line)?))
        .collect()
}

fn nibble(digit: u8, line: usize) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(RecordError::InvalidRecord { line, reason: "invalid hex digit" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("00ff1A", 1).unwrap(), [0x00, 0xFF, 0x1A]);
        assert!(decode_hex("0", 1).is_err());
        assert!(decode_hex("0G", 1).is_err());
    }

    #[test]
    fn test_file_type_from_str() {
        assert_eq!("IHEX".parse(), Ok(FileType::Ihex));
        assert_eq!("srecord".parse(), Ok(FileType::Srecord));
        assert!("elf".parse::<FileType>().is_err());
    }

    #[test]
    fn test_file_type_from_lead_byte() {
        assert_eq!(FileType::from_lead_byte(b':'), Some(FileType::Ihex));
        assert_eq!(FileType::from_lead_byte(b'S'), Some(FileType::Srecord));
        assert_eq!(FileType::from_lead_byte(b'#'), None);
    }
}
