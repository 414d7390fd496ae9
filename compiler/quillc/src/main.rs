//! quill CLI

use std::io::{self, IsTerminal};

use clap::Parser;
use quillc::commands::{extract_values, inspect_file, read_source};
use quillc::{init_tracing, Cli, Command};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = cli.settings(io::stdout().is_terminal());
    let source = read_source(cli.command.file());

    let outcome = match cli.command {
        Command::Inspect { .. } => inspect_file(&source, &settings, io::stdout()),
        Command::Values { .. } => extract_values(&source, &settings, io::stdout()).map(drop),
    };
    if let Err(fatal) = outcome {
        fatal.exit();
    }
}
