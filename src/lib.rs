//! Plugin Annotation - renders plugin configurations into annotation blocks
//!
//! Game-engine plugin loaders read plugin metadata (title, parameters,
//! commands, structs) from specially formatted comment blocks at the top of
//! a plugin source file. This crate encodes a typed, localizable
//! configuration into those blocks byte-for-byte.

pub mod domain;
pub mod annotation;
pub mod storage;
pub mod cli;

pub use annotation::{generate, AnnotationError, BuildOptions, Locale};
pub use domain::{LocalizedString, Parameter, ParamKind, PluginConfig, Target};
