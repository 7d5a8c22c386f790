//! # Annotation Encoder
//!
//! Turns a [`PluginConfig`](crate::domain::PluginConfig) into the comment
//! blocks an engine plugin loader scans for metadata. Pure: no I/O, no
//! shared state, a fresh string per call.
//!
//! ## Output Shape
//!
//! ```text
//! /*:
//!  * @target MZ
//!  * @plugindesc Demo
//!  * @author A
//!  *
//!  * @param flag
//!  * @type boolean
//!  * @on Yes
//!  * @off No
//!  * @default true
//!  */
//!
//! /*:ja
//!  * ...
//!  */
//! ```
//!
//! The block for the default language has no suffix after `/*:`. Each
//! declared struct adds a `/*~struct~Name:` block per language.
//!
//! ## Key Types
//!
//! - [`generate()`] - Renders all requested languages
//! - [`Locale`] - Localized value lookup with fallback
//! - [`BuildOptions`] - Languages to render and the default language
//! - [`missing_localizations()`] - Reports values that fall back to empty

mod block;
mod escape;
mod lines;
mod lint;
mod locale;
mod param;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use block::generate;
pub use escape::{escape_struct_value, MAX_STRUCT_DEPTH};
pub use lines::Lines;
pub use lint::{missing_localizations, MissingLocalization};
pub use locale::Locale;
pub use param::encode_parameter;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Struct value nested deeper than {limit} levels (cyclic default value?)")]
    StructTooDeep { limit: usize },

    #[error("Failed to encode value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which languages to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Languages in output order
    pub languages: Vec<String>,

    /// Fallback language; its blocks are unsuffixed
    pub default_language: String,
}

impl BuildOptions {
    pub fn new<I, S>(languages: I, default_language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            default_language: default_language.into(),
        }
    }

    /// Renders only `language`, which is also the default
    pub fn single(language: impl Into<String>) -> Self {
        let language = language.into();
        Self {
            languages: vec![language.clone()],
            default_language: language,
        }
    }
}
