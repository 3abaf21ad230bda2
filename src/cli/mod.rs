//! Command-line interface
//!
//! `logbook render` reads a JSON task export (file or stdin) and prints the
//! rendered markdown block; `logbook init` writes a default settings file.
//! All commands take `--verbose` for stderr diagnostics.
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;

pub use app::{Cli, Commands, run};
