//! The disassemble command.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use picdis::{Architecture, Error, FileType, FormatConfig};
use tracing::debug;

use crate::cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS, is_stdio};
use crate::terminal;

/// Run the command line and return the process exit code.
pub fn run(cli: &Cli) -> i32 {
    let arch = Architecture::from(cli.arch);
    let file_type = cli.file_type.map(FileType::from);
    let config = cli.format.to_config();
    debug!(input = %cli.input.display(), %arch, ?file_type, "disassembling");

    match disassemble(&cli.input, cli.out_file.as_deref(), file_type, arch, config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(error = ?e, "disassembly failed");
            terminal::error(&e.to_string());
            if !cli.silent {
                terminal::path_output(&cli.input);
            }
            EXIT_FAILURE
        }
    }
}

fn disassemble(
    input: &Path,
    output: Option<&Path>,
    file_type: Option<FileType>,
    arch: Architecture,
    config: FormatConfig,
) -> picdis::Result<()> {
    let reader: Box<dyn BufRead> = if is_stdio(input) {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(input).map_err(Error::Read)?))
    };
    let writer: Box<dyn Write> = match output {
        Some(path) if !is_stdio(path) => Box::new(File::create(path).map_err(Error::Write)?),
        _ => Box::new(io::stdout().lock()),
    };

    picdis::disassemble_file(reader, file_type, BufWriter::new(writer), arch, config)?;
    Ok(())
}
