//! picdis CLI - 8-bit PIC disassembler

mod cli;
mod command;
mod terminal;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the disassembly.
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.silent {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };
    let directive = format!("picdis={level}")
        .parse::<Directive>()
        .unwrap_or_else(|_| level.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = command::run(&cli);
    std::process::exit(exit_code);
}
