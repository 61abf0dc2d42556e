//! Intel HEX record parser.
//!
//! Record layout: `:LLAAAATT[DD...]CC`. Supports types 00 (data), 01 (EOF),
//! 02 (extended segment address) and 04 (extended linear address). Start
//! address records (03, 05) carry no program data and are skipped.

use crate::{DataRecord, Record, RecordError, Result, decode_hex};

/// Stateful line parser; extended address records update the base address
/// applied to subsequent data records.
#[derive(Clone, Debug, Default)]
pub struct IhexParser {
    base: u32,
}

impl IhexParser {
    pub const fn new() -> Self {
        Self { base: 0 }
    }

    /// Parse one trimmed, non-empty line. `line_no` is used in errors.
    pub fn parse_line(&mut self, text: &str, line_no: usize) -> Result<Record> {
        let invalid = |reason| RecordError::InvalidRecord { line: line_no, reason };

        let body = text.strip_prefix(':').ok_or_else(|| invalid("missing ':' start code"))?;
        let bytes = decode_hex(body, line_no)?;
        if bytes.len() < 5 {
            return Err(invalid("record too short"));
        }

        let count = usize::from(bytes[0]);
        if bytes.len() != count + 5 {
            return Err(invalid("byte count does not match record length"));
        }

        let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        if sum != 0 {
            let stored = bytes[bytes.len() - 1];
            return Err(RecordError::Checksum {
                line: line_no,
                computed: stored.wrapping_sub(sum),
                stored,
            });
        }

        let offset = u16::from_be_bytes([bytes[1], bytes[2]]);
        let data = &bytes[4..4 + count];
        match bytes[3] {
            0x00 => Ok(Record::Data(DataRecord {
                address: self.base.wrapping_add(u32::from(offset)),
                data: data.to_vec(),
            })),
            0x01 => Ok(Record::End),
            0x02 => {
                let segment =
                    Self::upper_address(data).ok_or_else(|| invalid("bad segment address"))?;
                self.base = segment << 4;
                Ok(Record::Skip("extended segment address"))
            }
            0x03 => Ok(Record::Skip("start segment address")),
            0x04 => {
                let upper = Self::upper_address(data).ok_or_else(|| invalid("bad linear address"))?;
                self.base = upper << 16;
                Ok(Record::Skip("extended linear address"))
            }
            0x05 => Ok(Record::Skip("start linear address")),
            _ => Err(invalid("unknown record type")),
        }
    }

    fn upper_address(data: &[u8]) -> Option<u32> {
        match data {
            &[hi, lo] => Some(u32::from(u16::from_be_bytes([hi, lo]))),
            _ => None,
        }
    }
}
