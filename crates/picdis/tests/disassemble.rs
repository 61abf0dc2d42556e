//! End-to-end disassembly of in-memory program files.

use picdis::{Architecture, Disassembler, Error, FileType, FormatConfig, disassemble_file};
use picdis_hex::{RecordError, read_words};

/// movlw 0x55; movwf 0x05; goto 0x002 at 0, return at 0x10.
const MIDRANGE_HEX: &str = "\
:06000000553085000228C6
:020020000800D6
:00000001FF
";

/// bra -127; moviw INDF1++; addfsr 1, -32 at 0x100, movlw 'A' at 0x140.
const ENHANCED_SREC: &str = "\
S109020081331600603199
S1050280413007
S9030000FC
";

fn run(
    input: &str,
    file_type: Option<FileType>,
    arch: Architecture,
    config: FormatConfig,
) -> String {
    let out = disassemble_file(input.as_bytes(), file_type, Vec::new(), arch, config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_midrange_address_column() {
    let out = run(MIDRANGE_HEX, Some(FileType::Ihex), Architecture::Midrange, FormatConfig::new());
    assert_eq!(
        out,
        "   0:\tmovlw 0x55\n   1:\tmovwf 0x05\n   2:\tgoto 0x002\n  10:\treturn \n"
    );
}

#[test]
fn test_midrange_address_labels() {
    let config = FormatConfig::new().with_address_label("L");
    let out = run(MIDRANGE_HEX, None, Architecture::Midrange, config);
    assert_eq!(
        out,
        "\norg 0x000\nL000\tmovlw 0x55\nL001\tmovwf 0x05\nL002\tgoto L002\n\
         \norg 0x010\nL010\treturn \nend\n"
    );
}

#[test]
fn test_midrange_original_opcodes() {
    let config = FormatConfig::plain().with_original_opcode(true);
    let out = run(MIDRANGE_HEX, None, Architecture::Midrange, config);
    assert_eq!(
        out,
        "\t3055\tmovlw 0x55\n\t0085\tmovwf 0x05\n\t2802\tgoto 0x002\n\t0008\treturn \n"
    );
}

#[test]
fn test_enhanced_srecord() {
    let config = FormatConfig::new()
        .with_address_column(false)
        .with_literal_ascii_comment(true);
    let out = run(ENHANCED_SREC, Some(FileType::Srecord), Architecture::Enhanced, config);
    assert_eq!(
        out,
        "\tbra .-127  \t; 0x82\n\tmoviw INDF1++\n\taddfsr 1, -32\n\tmovlw 0x41 \t; 'A'\n"
    );
}

#[test]
fn test_same_words_under_each_architecture() {
    // 0x0008 is `return` on the 14-bit cores but has no baseline encoding.
    let input = ":020000000800F6\n:00000001FF\n";
    let plain = FormatConfig::plain;
    assert_eq!(run(input, None, Architecture::Midrange, plain()), "\treturn \n");
    assert_eq!(run(input, None, Architecture::Enhanced, plain()), "\treturn \n");
    assert_eq!(run(input, None, Architecture::Baseline, plain()), "\tdata 0x008\n");
}

#[test]
fn test_odd_records_are_stitched() {
    let input = ":03000000553085F3\n:0100030000FC\n:00000001FF\n";
    let out = run(input, None, Architecture::Midrange, FormatConfig::plain());
    assert_eq!(out, "\tmovlw 0x55\n\tmovwf 0x05\n");
}

#[test]
fn test_dangling_byte_aborts() {
    let input = ":03000000553085F3\n:00000001FF\n";
    let err = disassemble_file(
        input.as_bytes(),
        None,
        Vec::new(),
        Architecture::Midrange,
        FormatConfig::plain(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Record(RecordError::DanglingByte(1))));
}

#[test]
fn test_checksum_error_aborts() {
    let input = ":06000000553085000228C7\n";
    let err = disassemble_file(
        input.as_bytes(),
        Some(FileType::Ihex),
        Vec::new(),
        Architecture::Midrange,
        FormatConfig::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Record(RecordError::Checksum { line: 1, .. })));
}

#[test]
fn test_driver_over_word_stream() {
    let mut disassembler =
        Disassembler::new(Vec::new(), Architecture::Midrange, FormatConfig::plain()).unwrap();
    disassembler
        .run(read_words(MIDRANGE_HEX.as_bytes(), FileType::Ihex))
        .unwrap();
    let out = String::from_utf8(disassembler.finish().unwrap()).unwrap();
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn test_every_word_renders() {
    // Totality: no word in any catalog fails to render.
    let config = FormatConfig::new().with_address_label("L").with_literal_ascii_comment(true);
    for arch in [Architecture::Baseline, Architecture::Midrange, Architecture::Enhanced] {
        let mut disassembler = Disassembler::new(std::io::sink(), arch, config.clone()).unwrap();
        for word in 0..=u16::MAX {
            disassembler
                .disassemble(picdis_isa::AssembledInstr::new(u32::from(word), word))
                .unwrap();
        }
        assert_eq!(disassembler.state().origins(), 1);
        disassembler.finish().unwrap();
    }
}
