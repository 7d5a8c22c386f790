//! Plugin schema loading
//!
//! A plugin configuration can be authored as JSON, YAML, or TOML; the
//! format is picked from the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::PluginConfig;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Unsupported schema file extension: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedExtension(PathBuf),

    #[error("Failed to parse {format} schema: {message}")]
    Parse {
        format: SchemaFormat,
        message: String,
    },
}

/// Serialization format of a schema file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
    Toml,
}

impl SchemaFormat {
    /// Detects the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(SchemaFormat::Json),
            Some("yaml") | Some("yml") => Ok(SchemaFormat::Yaml),
            Some("toml") => Ok(SchemaFormat::Toml),
            _ => Err(SchemaError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

impl std::fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaFormat::Json => write!(f, "JSON"),
            SchemaFormat::Yaml => write!(f, "YAML"),
            SchemaFormat::Toml => write!(f, "TOML"),
        }
    }
}

/// Parses a plugin configuration from text
pub fn parse_schema(content: &str, format: SchemaFormat) -> Result<PluginConfig, SchemaError> {
    let parsed: Result<PluginConfig, String> = match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SchemaFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| SchemaError::Parse { format, message })
}

/// Reads and parses a plugin configuration file
pub fn load_schema(path: &Path) -> Result<PluginConfig> {
    let format = SchemaFormat::from_path(path)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;

    parse_schema(&content, format)
        .with_context(|| format!("Invalid schema: {}", path.display()))
}
