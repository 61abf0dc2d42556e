//! Command-line tests against program files on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PROGRAM: &str = ":06000000553085000228C6\n:020020000800D6\n:00000001FF\n";

fn picdis(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_picdis"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run picdis")
}

fn write_program(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).expect("failed to write program");
    path.to_str().expect("non-UTF-8 temp path").to_owned()
}

#[test]
fn test_disassembles_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.hex", PROGRAM);

    let output = picdis(&[&input]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "   0:\tmovlw 0x55\n   1:\tmovwf 0x05\n   2:\tgoto 0x002\n  10:\treturn \n"
    );
}

#[test]
fn test_writes_out_file_with_labels() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.hex", PROGRAM);
    let out = dir.path().join("prog.asm");

    let output = picdis(&[
        "-l",
        "A",
        "--literal-dec",
        "-o",
        out.to_str().unwrap(),
        &input,
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "\norg 0x000\nA000\tmovlw 85\nA001\tmovwf 0x05\nA002\tgoto A002\n\
         \norg 0x010\nA010\treturn \nend\n"
    );
}

#[test]
fn test_explicit_file_type_and_arch() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.s19", "S1050200813344\nS9030000FC\n");

    let output = picdis(&["-a", "enhanced", "-t", "srecord", "--no-addresses", &input]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\tbra .-127  \t; 0x82\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.hex");

    let output = picdis(&[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unrecognized_file_type_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "prog.txt", "not a program\n");

    let output = picdis(&[&input]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_bad_checksum_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_program(dir.path(), "bad.hex", ":06000000553085000228C7\n");

    let output = picdis(&["-t", "ihex", &input]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}
