//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use picdis::{Architecture, FileType, FormatConfig, LiteralRadix};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "picdis")]
#[command(about = "8-bit PIC disassembler - disassembles Intel HEX and Motorola S-Record programs")]
#[command(version)]
pub struct Cli {
    /// Program file (use - for standard input)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write to output file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// 8-bit PIC architecture
    #[arg(short, long, value_enum, ignore_case = true, default_value = "midrange")]
    pub arch: ArchArg,

    /// Program file type (detected from the first character if omitted)
    #[arg(short = 't', long, value_enum, ignore_case = true)]
    pub file_type: Option<FileTypeArg>,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

/// Formatting options.
#[derive(Args, Clone, Debug)]
pub struct FormatArgs {
    /// Create address labels with the specified prefix
    #[arg(short = 'l', long, value_name = "PREFIX")]
    pub address_label: Option<String>,

    /// Print original opcode data alongside disassembly
    #[arg(long)]
    pub original: bool,

    /// Do not display the address alongside disassembly
    #[arg(long)]
    pub no_addresses: bool,

    /// Do not display the destination address comments of relative branches
    #[arg(long)]
    pub no_destination_comments: bool,

    /// Represent literals in hexadecimal (default)
    #[arg(long, group = "radix")]
    pub literal_hex: bool,

    /// Represent literals in binary
    #[arg(long, group = "radix")]
    pub literal_bin: bool,

    /// Represent literals in decimal
    #[arg(long, group = "radix")]
    pub literal_dec: bool,

    /// Show ASCII value of literal operands in a comment
    #[arg(long)]
    pub literal_ascii: bool,
}

impl FormatArgs {
    const fn radix(&self) -> LiteralRadix {
        if self.literal_bin {
            LiteralRadix::Bin
        } else if self.literal_dec {
            LiteralRadix::Dec
        } else {
            LiteralRadix::Hex
        }
    }

    /// Build the formatter configuration.
    pub fn to_config(&self) -> FormatConfig {
        let config = FormatConfig::new()
            .with_address_column(!self.no_addresses)
            .with_destination_comment(!self.no_destination_comments)
            .with_literal_radix(self.radix())
            .with_literal_ascii_comment(self.literal_ascii)
            .with_original_opcode(self.original);
        match &self.address_label {
            Some(prefix) => config.with_address_label(prefix.as_str()),
            None => config,
        }
    }
}

/// Architecture argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ArchArg {
    Baseline,
    Midrange,
    Enhanced,
}

impl From<ArchArg> for Architecture {
    fn from(arg: ArchArg) -> Self {
        match arg {
            ArchArg::Baseline => Self::Baseline,
            ArchArg::Midrange => Self::Midrange,
            ArchArg::Enhanced => Self::Enhanced,
        }
    }
}

/// File type argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FileTypeArg {
    /// Intel HEX8
    Ihex,
    /// Motorola S-Record
    Srecord,
}

impl From<FileTypeArg> for FileType {
    fn from(arg: FileTypeArg) -> Self {
        match arg {
            FileTypeArg::Ihex => Self::Ihex,
            FileTypeArg::Srecord => Self::Srecord,
        }
    }
}

/// Whether `path` names a standard stream.
pub fn is_stdio(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}
