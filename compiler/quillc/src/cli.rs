//! Command line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use quill_diagnostic::ColorMode;

use crate::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "quill",
    about = "Inspect source files and extract embedded values",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Always, global = true)]
    pub color: ColorChoice,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe every code point with its line, column and code
    Inspect {
        /// File to inspect
        file: PathBuf,
    },
    /// Print every array and object literal in the file as JSON
    Values {
        /// File to scan
        file: PathBuf,
    },
}

impl Command {
    /// The input file of the command.
    pub fn file(&self) -> &Path {
        match self {
            Command::Inspect { file } | Command::Values { file } => file,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

impl Cli {
    /// Command settings; `is_tty` says whether stdout is a terminal.
    pub fn settings(&self, is_tty: bool) -> Settings {
        Settings {
            color: self.color.into(),
            is_tty,
        }
    }
}
