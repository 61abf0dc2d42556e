//! Line-oriented record reader.

use std::io::{BufRead, ErrorKind, Lines};

use tracing::trace;

use crate::ihex::IhexParser;
use crate::{DataRecord, FileType, Record, RecordError, Result, srec};

/// Guess the file type from the first non-whitespace byte of `reader`
/// without consuming record data.
pub fn detect_file_type<R: BufRead>(reader: &mut R) -> Result<FileType> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Err(RecordError::UnknownFileType);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) => {
                let lead = buf[pos];
                reader.consume(pos);
                return FileType::from_lead_byte(lead).ok_or(RecordError::UnknownFileType);
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

enum Parser {
    Ihex(IhexParser),
    Srecord,
}

/// Iterator over the data records of a program file.
///
/// Blank lines are ignored and reading stops at the first end-of-file
/// record. The first error ends iteration.
pub struct RecordReader<R> {
    lines: Lines<R>,
    parser: Parser,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, file_type: FileType) -> Self {
        let parser = match file_type {
            FileType::Ihex => Parser::Ihex(IhexParser::new()),
            FileType::Srecord => Parser::Srecord,
        };
        Self { lines: reader.lines(), parser, line_no: 0, done: false }
    }

    fn parse(&mut self, text: &str) -> Result<Record> {
        match &mut self.parser {
            Parser::Ihex(parser) => parser.parse_line(text, self.line_no),
            Parser::Srecord => srec::parse_line(text, self.line_no),
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<DataRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let next = self.lines.next()?;
            self.line_no += 1;
            let line = match next {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    if e.kind() == ErrorKind::InvalidData {
                        return Some(Err(RecordError::InvalidRecord {
                            line: self.line_no,
                            reason: "non-UTF-8 record",
                        }));
                    }
                    return Some(Err(e.into()));
                }
            };

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match self.parse(text) {
                Ok(Record::Data(record)) => return Some(Ok(record)),
                Ok(Record::End) => self.done = true,
                Ok(Record::Skip(what)) => trace!(line = self.line_no, what, "skipping record"),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
