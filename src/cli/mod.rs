//! # Command-Line Interface
//!
//! Thin front end over the resolver library.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `resolve` | Turn a JSON artifact list into the ordered layer file list |
//! | `inspect` | Print the shaded-dependency manifest embedded in an archive |
//!
//! All commands support `--format text|json` and `--verbose` for
//! per-artifact decision logging on stderr.
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod resolve;
mod inspect;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
