//! Missing-localization report
//!
//! Encoding silently falls back to an empty string when a localized value
//! has neither the rendered nor the default language. This pass finds
//! those places so strict builds can warn about them.

use serde::Serialize;
use std::fmt;

use super::{BuildOptions, Locale};
use crate::domain::{Command, LocalizedString, ParamValue, Parameter, PluginConfig};

/// A localized value that resolves to an empty string for a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingLocalization {
    /// Language being rendered
    pub language: String,

    /// Dotted path of the value (e.g. `params.speed.text`)
    pub location: String,
}

impl fmt::Display for MissingLocalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.language, self.location)
    }
}

/// Lists every localized value the encoder would resolve to empty
pub fn missing_localizations(
    config: &PluginConfig,
    options: &BuildOptions,
) -> Vec<MissingLocalization> {
    let mut missing = Vec::new();

    for language in &options.languages {
        let mut collector = Collector {
            locale: Locale::new(language, &options.default_language),
            missing: &mut missing,
        };
        collector.config(config);
    }

    missing
}

struct Collector<'a> {
    locale: Locale<'a>,
    missing: &'a mut Vec<MissingLocalization>,
}

impl Collector<'_> {
    fn check(&mut self, location: &str, value: &LocalizedString) {
        if !value.has_language(self.locale.language())
            && !value.has_language(self.locale.default_language())
        {
            self.missing.push(MissingLocalization {
                language: self.locale.language().to_string(),
                location: location.to_string(),
            });
        }
    }

    fn check_optional(&mut self, location: &str, value: Option<&LocalizedString>) {
        if let Some(value) = value {
            self.check(location, value);
        }
    }

    fn config(&mut self, config: &PluginConfig) {
        self.check("title", &config.title);
        self.check("author", &config.author);
        self.check_optional("version", config.version.as_ref());
        self.check_optional("license", config.license.as_ref());
        self.check_optional("url", config.url.as_ref());
        self.check_optional("help", config.help.as_ref());

        for param in &config.params {
            self.param("params", param);
        }
        for command in &config.commands {
            self.command(command);
        }
        for plugin_struct in &config.structs {
            let prefix = format!("structs.{}.params", plugin_struct.name);
            for param in &plugin_struct.params {
                self.param(&prefix, param);
            }
        }
    }

    fn command(&mut self, command: &Command) {
        let prefix = format!("commands.{}", command.name);
        self.check(&format!("{}.text", prefix), &command.text);
        self.check(&format!("{}.description", prefix), &command.description);

        let args = format!("{}.args", prefix);
        for arg in &command.args {
            self.param(&args, arg);
        }
    }

    fn param(&mut self, prefix: &str, param: &Parameter) {
        let at = |field: &str| format!("{}.{}.{}", prefix, param.name, field);

        self.check_optional(&at("parent"), param.parent.as_ref());
        self.check_optional(&at("text"), param.text.as_ref());
        self.check_optional(&at("description"), param.description.as_ref());

        match &param.value {
            ParamValue::String { default } | ParamValue::MultilineString { default } => {
                self.check_optional(&at("default"), default.as_ref());
            }
            ParamValue::Note { default } => self.check(&at("default"), default),
            ParamValue::StringArray { default }
            | ParamValue::MultilineStringArray { default }
            | ParamValue::NoteArray { default } => {
                for (i, value) in default.iter().enumerate() {
                    self.check(&at(&format!("default.{}", i)), value);
                }
            }
            ParamValue::Boolean { labels, .. } | ParamValue::BooleanArray { labels, .. } => {
                self.check(&at("on"), &labels.on);
                self.check(&at("off"), &labels.off);
            }
            ParamValue::Select { options, .. } | ParamValue::SelectArray { options, .. } => {
                for (i, option) in options.iter().enumerate() {
                    self.check(&at(&format!("options.{}", i)), &option.name);
                }
            }
            ParamValue::Combo { options, .. } => {
                for (i, option) in options.iter().enumerate() {
                    self.check(&at(&format!("options.{}", i)), option);
                }
            }
            ParamValue::Number { .. }
            | ParamValue::NumberArray { .. }
            | ParamValue::File { .. }
            | ParamValue::FileArray { .. }
            | ParamValue::Database { .. }
            | ParamValue::DatabaseArray { .. }
            | ParamValue::Struct { .. }
            | ParamValue::StructArray { .. } => {}
        }
    }
}
