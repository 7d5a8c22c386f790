//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Write a starter `annotate.toml` |
//! | `build` | Render annotation blocks from a plugin schema |
//! | `check` | Report values missing a translation |
//! | `kinds` | List the supported parameter types |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! annotate --verbose build plugin.yaml --lang en --lang ja
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod build;
mod output;

pub use app::{run, Cli, Commands};
pub use build::{BuildArgs, CheckArgs, LanguageArgs};
pub use output::{Output, OutputFormat};
