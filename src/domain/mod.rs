//! Domain models for plugin annotations
//!
//! The configuration types the encoder consumes, without any I/O concerns.

mod localized;
mod param;
mod plugin;

pub use localized::LocalizedString;
pub use param::{
    BooleanLabels, DatabaseKind, NumberRange, ParamError, ParamKind, ParamValue, Parameter,
    SelectOption,
};
pub use plugin::{Command, NoteAsset, PluginConfig, PluginStruct, Target};
