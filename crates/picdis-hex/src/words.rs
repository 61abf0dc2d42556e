//! Data records to instruction words.

use std::io::BufRead;

use picdis_isa::AssembledInstr;

use crate::{DataRecord, FileType, RecordError, RecordReader, Result};

/// Iterator turning data records into little-endian instruction words.
///
/// Word addresses are byte addresses halved. A record with an odd number of
/// bytes leaves its last byte pending; the first byte of the next record
/// becomes the high byte of that word, which keeps the word address of its
/// low byte. A byte still pending at end of input is an error.
pub struct WordStream<I> {
    records: I,
    current: Option<DataRecord>,
    offset: usize,
    /// Word address and low byte awaiting a partner.
    pending: Option<(u32, u8)>,
    done: bool,
}

impl<I> WordStream<I>
where
    I: Iterator<Item = Result<DataRecord>>,
{
    pub const fn new(records: I) -> Self {
        Self { records, current: None, offset: 0, pending: None, done: false }
    }
}

/// Word stream over a program file of the given type.
pub fn read_words<R: BufRead>(reader: R, file_type: FileType) -> WordStream<RecordReader<R>> {
    WordStream::new(RecordReader::new(reader, file_type))
}

impl<I> Iterator for WordStream<I>
where
    I: Iterator<Item = Result<DataRecord>>,
{
    type Item = Result<AssembledInstr>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(record) = &self.current {
                let data = &record.data;
                let offset = self.offset;
                if offset < data.len() {
                    if let Some((address, low)) = self.pending.take() {
                        self.offset += 1;
                        let word = u16::from_le_bytes([low, data[offset]]);
                        return Some(Ok(AssembledInstr::new(address, word)));
                    }

                    #[allow(clippy::cast_possible_truncation)]
                    let address = record.address.wrapping_add(offset as u32) / 2;
                    if let Some(&[low, high]) = data.get(offset..offset + 2) {
                        self.offset += 2;
                        let word = u16::from_le_bytes([low, high]);
                        return Some(Ok(AssembledInstr::new(address, word)));
                    }
                    self.offset += 1;
                    self.pending = Some((address, data[offset]));
                    continue;
                }
            }

            match self.records.next() {
                Some(Ok(record)) => {
                    self.current = Some(record);
                    self.offset = 0;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    if let Some((address, _)) = self.pending.take() {
                        return Some(Err(RecordError::DanglingByte(address)));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: u32, data: &[u8]) -> Result<DataRecord> {
        Ok(DataRecord { address, data: data.to_vec() })
    }

    fn words(records: Vec<Result<DataRecord>>) -> Vec<Result<AssembledInstr>> {
        WordStream::new(records.into_iter()).collect()
    }

    fn pairs(records: Vec<Result<DataRecord>>) -> Vec<(u32, u16)> {
        words(records)
            .into_iter()
            .map(|w| {
                let w = w.unwrap();
                (w.address, w.opcode)
            })
            .collect()
    }

    #[test]
    fn test_little_endian_words() {
        let out = pairs(vec![record(0x20, &[0xA5, 0x07, 0x83, 0x16])]);
        assert_eq!(out, [(0x10, 0x07A5), (0x11, 0x1683)]);
    }

    #[test]
    fn test_odd_record_is_stitched() {
        let out = pairs(vec![
            record(0x00, &[0x01, 0x02, 0x03]),
            record(0x03, &[0x04, 0x05, 0x06]),
        ]);
        assert_eq!(out, [(0, 0x0201), (1, 0x0403), (2, 0x0605)]);
    }

    #[test]
    fn test_empty_records_are_ignored() {
        let out = pairs(vec![record(0x00, &[]), record(0x04, &[0x00, 0x30])]);
        assert_eq!(out, [(2, 0x3000)]);
    }

    #[test]
    fn test_dangling_byte_is_an_error() {
        let out = words(vec![record(0x00, &[0x01, 0x02, 0x03])]);
        assert_eq!(out.len(), 2);
        assert!(matches!(out[1], Err(RecordError::DanglingByte(1))));
    }

    #[test]
    fn test_record_error_stops_stream() {
        let out = words(vec![
            record(0x00, &[0x00, 0x00]),
            Err(RecordError::UnknownFileType),
            record(0x02, &[0x00, 0x00]),
        ]);
        assert_eq!(out.len(), 2);
        assert!(out[1].is_err());
    }

    #[test]
    fn test_read_words_from_ihex() {
        let text = ":04000000A5078316B7\n:00000001FF\n";
        let out: Vec<_> = read_words(text.as_bytes(), FileType::Ihex)
            .map(Result::unwrap)
            .collect();
        assert_eq!(out, [AssembledInstr::new(0, 0x07A5), AssembledInstr::new(1, 0x1683)]);
    }
}
