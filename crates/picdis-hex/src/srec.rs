//! Motorola S-Record parser.
//!
//! Record layout: `S<t><count><address><data...><checksum>`, where `count`
//! covers address, data and checksum bytes and the checksum is the ones'
//! complement of the low byte of their sum.

use crate::{DataRecord, Record, RecordError, Result, decode_hex};

/// Address width in bytes for each record type, `None` for unassigned types.
const fn address_width(kind: u8) -> Option<usize> {
    match kind {
        b'0' | b'1' | b'5' | b'9' => Some(2),
        b'2' | b'6' | b'8' => Some(3),
        b'3' | b'7' => Some(4),
        _ => None,
    }
}

/// Parse one trimmed, non-empty line. `line_no` is used in errors.
pub fn parse_line(text: &str, line_no: usize) -> Result<Record> {
    let invalid = |reason| RecordError::InvalidRecord { line: line_no, reason };

    let body = text.strip_prefix('S').ok_or_else(|| invalid("missing 'S' start code"))?;
    let kind = *body.as_bytes().first().ok_or_else(|| invalid("missing record type"))?;
    let width = address_width(kind).ok_or_else(|| invalid("unknown record type"))?;
    let bytes = decode_hex(&body[1..], line_no)?;

    let Some((&count, rest)) = bytes.split_first() else {
        return Err(invalid("record too short"));
    };
    if rest.len() != usize::from(count) || rest.len() < width + 1 {
        return Err(invalid("byte count does not match record length"));
    }

    let (payload, stored) = rest.split_at(rest.len() - 1);
    let stored = stored[0];
    let sum = payload.iter().fold(count, |acc, &b| acc.wrapping_add(b));
    let computed = !sum;
    if computed != stored {
        return Err(RecordError::Checksum { line: line_no, computed, stored });
    }

    let (address, data) = payload.split_at(width);
    let address = address.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
    match kind {
        b'1' | b'2' | b'3' => Ok(Record::Data(DataRecord { address, data: data.to_vec() })),
        b'7' | b'8' | b'9' => Ok(Record::End),
        b'0' => Ok(Record::Skip("header")),
        _ => Ok(Record::Skip("record count")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s1_data_record() {
        assert_eq!(
            parse_line("S1070000A5078316B3", 1).unwrap(),
            Record::Data(DataRecord { address: 0, data: vec![0xA5, 0x07, 0x83, 0x16] })
        );
    }

    #[test]
    fn test_wide_addresses() {
        let Record::Data(s2) = parse_line("S2060100000030C8", 1).unwrap() else {
            panic!("expected data record");
        };
        assert_eq!(s2.address, 0x01_0000);
        assert_eq!(s2.data, [0x00, 0x30]);

        let Record::Data(s3) = parse_line("S30700000020553053", 1).unwrap() else {
            panic!("expected data record");
        };
        assert_eq!(s3.address, 0x20);
        assert_eq!(s3.data, [0x55, 0x30]);
    }

    #[test]
    fn test_non_data_records() {
        assert!(matches!(parse_line("S00600004844521B", 1).unwrap(), Record::Skip(_)));
        assert!(matches!(parse_line("S5030002FA", 1).unwrap(), Record::Skip(_)));
        assert_eq!(parse_line("S9030000FC", 1).unwrap(), Record::End);
    }

    #[test]
    fn test_checksum_mismatch() {
        let err = parse_line("S1070000A5078316B4", 3).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Checksum { line: 3, computed: 0xB3, stored: 0xB4 }
        ));
    }

    #[test]
    fn test_malformed_records() {
        assert!(parse_line("S4030000FC", 1).is_err());
        assert!(parse_line("S1080000A5078316B3", 1).is_err());
        assert!(parse_line("S1", 1).is_err());
        assert!(parse_line("S10200FD", 1).is_err());
        assert!(parse_line(":00000001FF", 1).is_err());
    }
}
