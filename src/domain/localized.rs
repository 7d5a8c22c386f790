//! Localizable strings
//!
//! Most human-readable fields of a plugin configuration can be written
//! either as a plain string or as a map from language code to string.
//! A map never guarantees that a given language is present.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A string that is either language-invariant or keyed by language code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    /// The same text for every language
    Plain(String),

    /// Per-language text (e.g. `{"en": "Speed", "ja": "速度"}`)
    Localized(HashMap<String, String>),
}

impl LocalizedString {
    /// Creates a per-language string from `(language, text)` pairs
    pub fn localized<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Localized(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the text stored for exactly this language, without fallback
    pub fn get(&self, language: &str) -> Option<&str> {
        match self {
            LocalizedString::Plain(s) => Some(s),
            LocalizedString::Localized(map) => map.get(language).map(String::as_str),
        }
    }

    /// Returns true if a lookup for `language` would hit without fallback
    pub fn has_language(&self, language: &str) -> bool {
        self.get(language).is_some()
    }
}

impl Default for LocalizedString {
    fn default() -> Self {
        LocalizedString::Plain(String::new())
    }
}

impl From<&str> for LocalizedString {
    fn from(s: &str) -> Self {
        LocalizedString::Plain(s.to_string())
    }
}

impl From<String> for LocalizedString {
    fn from(s: String) -> Self {
        LocalizedString::Plain(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_plain() {
        let value: LocalizedString = serde_json::from_str(r#""Speed""#).unwrap();
        assert_eq!(value, LocalizedString::from("Speed"));
    }

    #[test]
    fn deserialize_localized() {
        let value: LocalizedString =
            serde_json::from_str(r#"{"en": "Speed", "ja": "速度"}"#).unwrap();

        assert!(matches!(value, LocalizedString::Localized(_)));
        assert_eq!(value.get("ja"), Some("速度"));
        assert_eq!(value.get("fr"), None);
    }

    #[test]
    fn plain_has_every_language() {
        let value = LocalizedString::from("x");
        assert!(value.has_language("en"));
        assert!(value.has_language("anything"));
    }

    #[test]
    fn default_is_empty_plain() {
        assert_eq!(LocalizedString::default(), LocalizedString::Plain(String::new()));
    }

    #[test]
    fn localized_builder() {
        let value = LocalizedString::localized([("en", "Yes"), ("ja", "はい")]);
        assert!(value.has_language("en"));
        assert!(!value.has_language("de"));
    }
}
