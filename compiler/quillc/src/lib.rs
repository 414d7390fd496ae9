//! quill command line front end.
//!
//! The binary is a thin wrapper: argument parsing lives in [`cli`], each
//! subcommand in [`commands`]. Commands write to any `io::Write` so they can
//! be driven from tests.

use std::sync::Once;

pub mod cli;
pub mod commands;

pub use cli::{Cli, ColorChoice, Command};
pub use commands::Settings;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Only installs when `RUST_LOG` is set or `verbosity` is non-zero. `RUST_LOG`
/// wins; otherwise `-v` selects `debug` and `-vv` selects `trace`. Safe to
/// call more than once.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            match verbosity {
                0 => return,
                1 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        };
        let _ = tracing_subscriber::registry()
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .with(filter)
            .try_init();
    });
}
