//! Plugin configuration model
//!
//! A [`PluginConfig`] is the fully-validated description of one plugin:
//! identity, load-order dependencies, required assets, parameters,
//! commands, and reusable struct types. It is read-only data for the
//! encoder.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::localized::LocalizedString;
use super::param::Parameter;

/// Engine platform a plugin targets
///
/// Schema files may spell the tag in any case (`MV`, `mv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Target {
    /// Legacy platform; switches on several backward-compatible emission rules
    Mv,

    /// Current platform
    Mz,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Mv => "MV",
            Target::Mz => "MZ",
        }
    }

    /// Returns true for the legacy platform
    pub fn is_legacy(&self) -> bool {
        matches!(self, Target::Mv)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MV" => Ok(Target::Mv),
            "MZ" => Ok(Target::Mz),
            _ => Err(format!("Unknown target: {}", s)),
        }
    }
}

impl TryFrom<String> for Target {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An asset referenced from note tags of database entries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteAsset {
    /// Note tag name
    pub name: String,

    /// Asset directory
    pub dir: String,

    /// Database type the note belongs to
    #[serde(rename = "type")]
    pub asset_type: String,

    /// Data file the note lives in
    pub data: String,
}

/// A plugin command and its arguments
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Command {
    pub name: String,

    #[serde(default)]
    pub text: LocalizedString,

    #[serde(default)]
    pub description: LocalizedString,

    #[serde(default)]
    pub args: Vec<Parameter>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: LocalizedString::default(),
            description: LocalizedString::default(),
            args: Vec::new(),
        }
    }
}

/// A reusable record type referenced by `struct` parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginStruct {
    pub name: String,

    #[serde(default)]
    pub params: Vec<Parameter>,
}

impl PluginStruct {
    pub fn new(name: impl Into<String>, params: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Complete description of a plugin
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Target platforms, in emission order
    pub target: Vec<Target>,

    /// Short description shown in the plugin manager (`@plugindesc`)
    pub title: LocalizedString,

    pub author: LocalizedString,

    #[serde(default)]
    pub version: Option<LocalizedString>,

    #[serde(default)]
    pub license: Option<LocalizedString>,

    #[serde(default)]
    pub url: Option<LocalizedString>,

    /// Long help text
    #[serde(default)]
    pub help: Option<LocalizedString>,

    /// Plugins that must be installed
    #[serde(default)]
    pub base: Vec<String>,

    /// Plugins that must load before this one
    #[serde(default)]
    pub order_after: Vec<String>,

    /// Plugins that must load after this one
    #[serde(default)]
    pub order_before: Vec<String>,

    /// Asset paths the deployment tool must keep
    #[serde(default)]
    pub required_assets: Vec<String>,

    #[serde(default)]
    pub required_note_assets: Vec<NoteAsset>,

    #[serde(default)]
    pub params: Vec<Parameter>,

    #[serde(default)]
    pub commands: Vec<Command>,

    #[serde(default)]
    pub structs: Vec<PluginStruct>,
}

impl PluginConfig {
    /// Creates a configuration targeting the current platform with no
    /// optional sections
    pub fn new(title: impl Into<LocalizedString>, author: impl Into<LocalizedString>) -> Self {
        Self {
            target: vec![Target::Mz],
            title: title.into(),
            author: author.into(),
            version: None,
            license: None,
            url: None,
            help: None,
            base: Vec::new(),
            order_after: Vec::new(),
            order_before: Vec::new(),
            required_assets: Vec::new(),
            required_note_assets: Vec::new(),
            params: Vec::new(),
            commands: Vec::new(),
            structs: Vec::new(),
        }
    }

    /// Returns true if the legacy platform is among the targets
    pub fn is_legacy(&self) -> bool {
        self.target.iter().any(Target::is_legacy)
    }
}
