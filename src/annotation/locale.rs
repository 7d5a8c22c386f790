//! Localized value resolution
//!
//! Lookup falls back from the requested language to the default language
//! and finally to an empty string. A missing translation never fails: a
//! metadata block must stay syntactically complete even when a
//! configuration is only partially localized.

use serde_json::Value;

use crate::domain::LocalizedString;

/// The language being rendered and the language to fall back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale<'a> {
    language: &'a str,
    default_language: &'a str,
}

impl<'a> Locale<'a> {
    pub fn new(language: &'a str, default_language: &'a str) -> Self {
        Self {
            language,
            default_language,
        }
    }

    /// Returns the language being rendered
    pub fn language(&self) -> &'a str {
        self.language
    }

    /// Returns the fallback language
    pub fn default_language(&self) -> &'a str {
        self.default_language
    }

    /// Returns true when rendering the canonical (default language) block
    pub fn is_default(&self) -> bool {
        self.language == self.default_language
    }

    /// Resolves a localizable string for this locale
    pub fn resolve<'v>(&self, value: &'v LocalizedString) -> &'v str {
        match value {
            LocalizedString::Plain(s) => s,
            LocalizedString::Localized(map) => map
                .get(self.language)
                .or_else(|| map.get(self.default_language))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Resolves a struct-shaped default value
    ///
    /// A record keyed by the language (or the default language) yields that
    /// entry; anything else is returned as-is.
    pub fn resolve_structured<'v>(&self, value: &'v Value) -> &'v Value {
        if let Value::Object(map) = value {
            if let Some(localized) = map
                .get(self.language)
                .or_else(|| map.get(self.default_language))
            {
                return localized;
            }
        }
        value
    }
}
