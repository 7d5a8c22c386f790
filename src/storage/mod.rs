//! # Storage Layer
//!
//! File I/O around the pure encoder.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Plugin schema | JSON, YAML or TOML (by extension) | any path given on the command line |
//! | Build config | TOML | `annotate.toml` in the project root |
//! | Global config | TOML | `~/.config/plugin-annotation/config.toml` |
//! | Annotation output | text | `--output` / `output` in `annotate.toml`, else stdout |
//!
//! All output writes are atomic (temp file + rename).
//!
//! ## Key Types
//!
//! - [`load_schema()`] - Reads a [`PluginConfig`](crate::domain::PluginConfig)
//! - [`Config`] - Project and global build configuration
//! - [`write_atomic()`] - Writes rendered annotations

mod config;
mod schema;
mod writer;

pub use config::{
    Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, FALLBACK_LANGUAGE,
    PROJECT_CONFIG_FILE,
};
pub use schema::{load_schema, parse_schema, SchemaError, SchemaFormat};
pub use writer::write_atomic;
