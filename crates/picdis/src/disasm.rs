//! Stream driver: feeds instruction words through decode and render.

use std::io::{BufRead, Write};

use picdis_hex::{FileType, detect_file_type, read_words};
use picdis_isa::{Architecture, AssembledInstr, Catalog};
use tracing::{info, trace};

use crate::format::{FormatterState, LINE_CAPACITY, render};
use crate::{Error, FormatConfig, Result};

/// One disassembly run writing to `out`.
///
/// Instructions must be fed in stream order; the formatter state is scoped
/// to this value. Call [`Disassembler::finish`] once the input is exhausted.
pub struct Disassembler<W: Write> {
    out: W,
    catalog: Catalog,
    config: FormatConfig,
    state: FormatterState,
    line: Vec<u8>,
    instructions: u64,
}

impl<W: Write> Disassembler<W> {
    /// Start a run for `arch`. Fails for architectures without a catalog.
    pub fn new(out: W, arch: Architecture, config: FormatConfig) -> Result<Self> {
        let catalog = Catalog::for_arch(arch)?;
        Ok(Self {
            out,
            catalog,
            config,
            state: FormatterState::new(),
            line: Vec::new(),
            instructions: 0,
        })
    }

    pub const fn state(&self) -> &FormatterState {
        &self.state
    }

    /// Decode and render one instruction word.
    pub fn disassemble(&mut self, instr: AssembledInstr) -> Result<()> {
        let decoded = self.catalog.decode(instr);
        trace!(
            address = instr.address,
            opcode = instr.opcode,
            mnemonic = decoded.mnemonic(),
            "decoded"
        );

        self.line.clear();
        self.line.try_reserve(LINE_CAPACITY)?;
        render(&mut self.line, &decoded, &self.config, &mut self.state)?;
        self.out.write_all(&self.line).map_err(Error::Write)?;
        self.instructions += 1;
        Ok(())
    }

    /// Disassemble every word of `words`, stopping at the first error.
    pub fn run<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = picdis_hex::Result<AssembledInstr>>,
    {
        for word in words {
            self.disassemble(word?)?;
        }
        Ok(())
    }

    /// Write the end marker (label mode only), flush, and return the sink.
    pub fn finish(mut self) -> Result<W> {
        if self.config.flags.address_label() {
            self.out.write_all(b"end\n").map_err(Error::Write)?;
        }
        self.out.flush().map_err(Error::Write)?;
        info!(
            instructions = self.instructions,
            origins = self.state.origins(),
            "disassembly complete"
        );
        Ok(self.out)
    }
}

/// Disassemble a whole program file from `input` into `out`.
///
/// When `file_type` is `None` the format is guessed from the first
/// non-blank character.
pub fn disassemble_file<R: BufRead, W: Write>(
    mut input: R,
    file_type: Option<FileType>,
    out: W,
    arch: Architecture,
    config: FormatConfig,
) -> Result<W> {
    let mut disassembler = Disassembler::new(out, arch, config)?;
    let file_type = match file_type {
        Some(file_type) => file_type,
        None => detect_file_type(&mut input)?,
    };
    disassembler.run(read_words(input, file_type))?;
    disassembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(pairs: &[(u32, u16)]) -> Vec<picdis_hex::Result<AssembledInstr>> {
        pairs.iter().map(|&(a, w)| Ok(AssembledInstr::new(a, w))).collect()
    }

    #[test]
    fn test_pic18_is_rejected() {
        let err = Disassembler::new(Vec::new(), Architecture::Pic18, FormatConfig::new()).err();
        assert!(matches!(err, Some(Error::Isa(_))));
    }

    #[test]
    fn test_end_marker_only_in_label_mode() {
        let mut plain = Disassembler::new(Vec::new(), Architecture::Midrange, FormatConfig::plain())
            .unwrap();
        plain.run(words(&[(0, 0)])).unwrap();
        assert_eq!(plain.finish().unwrap(), b"\tnop \n");

        let config = FormatConfig::plain().with_address_label("L");
        let mut labelled = Disassembler::new(Vec::new(), Architecture::Midrange, config).unwrap();
        labelled.run(words(&[(0, 0)])).unwrap();
        assert_eq!(labelled.finish().unwrap(), b"\norg 0x000\nL000\tnop \nend\n");
    }

    #[test]
    fn test_empty_label_run_is_just_end() {
        let config = FormatConfig::new().with_address_label("L");
        let disassembler = Disassembler::new(Vec::new(), Architecture::Baseline, config).unwrap();
        assert_eq!(disassembler.finish().unwrap(), b"end\n");
    }

    #[test]
    fn test_run_stops_at_first_error() {
        let mut disassembler =
            Disassembler::new(Vec::new(), Architecture::Midrange, FormatConfig::plain()).unwrap();
        let mut input = words(&[(0, 0)]);
        input.push(Err(picdis_hex::RecordError::DanglingByte(1)));
        input.push(Ok(AssembledInstr::new(2, 0)));
        let err = disassembler.run(input).unwrap_err();
        assert!(matches!(err, Error::Record(picdis_hex::RecordError::DanglingByte(1))));
        assert_eq!(disassembler.finish().unwrap(), b"\tnop \n");
    }

    #[test]
    fn test_state_is_scoped_to_run() {
        let config = FormatConfig::plain().with_address_label("L");
        for _ in 0..2 {
            let mut disassembler =
                Disassembler::new(Vec::new(), Architecture::Midrange, config.clone()).unwrap();
            disassembler.run(words(&[(4, 0), (5, 0)])).unwrap();
            assert_eq!(disassembler.state().origins(), 1);
        }
    }

    #[test]
    fn test_disassemble_file_sniffs_type() {
        let input = "S1070000A5078316B3\nS9030000FC\n";
        let out = disassemble_file(
            input.as_bytes(),
            None,
            Vec::new(),
            Architecture::Midrange,
            FormatConfig::plain(),
        )
        .unwrap();
        assert_eq!(out, b"\taddwf 0x25, F\n\tbsf 0x03, 5\n");
    }

    #[test]
    fn test_disassemble_file_unknown_type() {
        let err = disassemble_file(
            "hello".as_bytes(),
            None,
            Vec::new(),
            Architecture::Midrange,
            FormatConfig::plain(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Record(picdis_hex::RecordError::UnknownFileType)));
    }
}
