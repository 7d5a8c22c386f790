//! Parameter encoding
//!
//! Emits the directives describing one parameter, in fixed order:
//! name, parent, text, description, type, then the kind-specific
//! directives ending with the default value.

use serde::Serialize;
use serde_json::{Number, Value};

use super::escape::{canonical_number, canonical_value, escape_struct_value};
use super::lines::Lines;
use super::locale::Locale;
use super::AnnotationError;
use crate::domain::{
    BooleanLabels, LocalizedString, NumberRange, ParamValue, Parameter, SelectOption,
};

/// Compact JSON encoding, as the loader parses defaults back
fn compact<T: Serialize + ?Sized>(value: &T) -> Result<String, AnnotationError> {
    Ok(serde_json::to_string(value)?)
}

/// Appends the directives for `param` to `lines`
///
/// `directive` names the parameter itself: `param` for plugin and struct
/// parameters, `arg` for command arguments. `legacy` selects the rules of
/// the legacy platform.
pub fn encode_parameter(
    lines: &mut Lines,
    directive: &str,
    param: &Parameter,
    locale: &Locale<'_>,
    legacy: bool,
) -> Result<(), AnnotationError> {
    lines.push(directive, &param.name);
    if let Some(parent) = &param.parent {
        lines.push("parent", locale.resolve(parent));
    }
    if let Some(text) = &param.text {
        lines.push("text", locale.resolve(text));
    }
    if let Some(description) = &param.description {
        lines.push("desc", locale.resolve(description));
    }
    lines.push("type", &type_tag(&param.value, legacy));

    match &param.value {
        ParamValue::String { default } => {
            if let Some(default) = default {
                lines.push("default", locale.resolve(default));
            }
        }
        ParamValue::StringArray { default } => {
            lines.push("default", &compact(&resolve_all(default, locale))?);
        }
        ParamValue::MultilineString { default } => {
            if let Some(default) = default {
                let text = locale.resolve(default);
                if legacy {
                    lines.push("default", &compact(text)?);
                } else {
                    lines.push("default", text);
                }
            }
        }
        ParamValue::MultilineStringArray { default } => {
            if legacy {
                lines.push("default", &quoted_list(default, locale)?);
            } else {
                lines.push("default", &compact(&resolve_all(default, locale))?);
            }
        }
        ParamValue::Note { default } => {
            lines.push("default", &compact(locale.resolve(default))?);
        }
        ParamValue::NoteArray { default } => {
            lines.push("default", &quoted_list(default, locale)?);
        }
        ParamValue::Number { range, default } => {
            push_range(lines, range);
            lines.push("default", &canonical_number(default).to_string());
        }
        ParamValue::NumberArray { range, default } => {
            push_range(lines, range);
            let numbers: Vec<Number> = default.iter().map(canonical_number).collect();
            lines.push("default", &compact(&numbers)?);
        }
        ParamValue::Boolean { labels, default } => {
            push_labels(lines, labels, locale);
            lines.push("default", &compact(default)?);
        }
        ParamValue::BooleanArray { labels, default } => {
            push_labels(lines, labels, locale);
            lines.push("default", &compact(default)?);
        }
        ParamValue::File { dir, default } => {
            lines.push("dir", dir);
            if let Some(default) = default {
                lines.push("default", default);
            }
            if legacy {
                lines.push("require", "1");
            }
        }
        ParamValue::FileArray { dir, default } => {
            lines.push("dir", dir);
            lines.push("default", &compact(default)?);
            if legacy {
                lines.push("require", "1");
            }
        }
        ParamValue::Select { options, default } => {
            push_options(lines, options, locale);
            if let Some(default) = default {
                lines.push("default", &option_value(default));
            }
        }
        ParamValue::SelectArray { options, default } => {
            push_options(lines, options, locale);
            let values: Vec<Value> = default.iter().map(canonical_value).collect();
            lines.push("default", &compact(&values)?);
        }
        ParamValue::Combo { options, default } => {
            for option in options {
                lines.push("option", locale.resolve(option));
            }
            if let Some(default) = default {
                lines.push("default", default);
            }
        }
        ParamValue::Database { default, .. } => {
            lines.push("default", &default.to_string());
        }
        ParamValue::DatabaseArray { default, .. } => {
            lines.push("default", &compact(default)?);
        }
        ParamValue::Struct { default, .. } => {
            lines.push("default", &escape_struct_value(locale.resolve_structured(default))?);
        }
        ParamValue::StructArray { default, .. } => {
            let escaped = default
                .iter()
                .map(|record| escape_struct_value(locale.resolve_structured(record)))
                .collect::<Result<Vec<_>, _>>()?;
            lines.push("default", &compact(&escaped)?);
        }
    }

    Ok(())
}

/// The `@type` value; the legacy platform spells `multiline_string` as `note`
fn type_tag(value: &ParamValue, legacy: bool) -> String {
    match value {
        ParamValue::Struct { name, .. } => format!("struct<{}>", name),
        ParamValue::StructArray { name, .. } => format!("struct<{}>[]", name),
        other => {
            let tag = other.kind().to_string();
            match tag.strip_prefix("multiline_string") {
                Some(rest) if legacy => format!("note{}", rest),
                _ => tag,
            }
        }
    }
}

fn resolve_all<'v>(values: &'v [LocalizedString], locale: &Locale<'_>) -> Vec<&'v str> {
    values.iter().map(|v| locale.resolve(v)).collect()
}

/// Encodes a string list with every element quoted once more
fn quoted_list(
    values: &[LocalizedString],
    locale: &Locale<'_>,
) -> Result<String, AnnotationError> {
    let quoted = values
        .iter()
        .map(|v| compact(locale.resolve(v)))
        .collect::<Result<Vec<_>, _>>()?;
    compact(&quoted)
}

fn push_range(lines: &mut Lines, range: &NumberRange) {
    if let Some(min) = &range.min {
        lines.push("min", &canonical_number(min).to_string());
    }
    if let Some(max) = &range.max {
        lines.push("max", &canonical_number(max).to_string());
    }
    if range.decimals > 0 {
        lines.push("decimals", &range.decimals.to_string());
    }
}

fn push_labels(lines: &mut Lines, labels: &BooleanLabels, locale: &Locale<'_>) {
    lines.push("on", locale.resolve(&labels.on));
    lines.push("off", locale.resolve(&labels.off));
}

fn push_options(lines: &mut Lines, options: &[SelectOption], locale: &Locale<'_>) {
    for option in options {
        lines.push("option", locale.resolve(&option.name));
        lines.push("value", &option_value(&option.value));
    }
}

/// Select values are written raw: strings unquoted, anything else as JSON
fn option_value(value: &Value) -> String {
    match canonical_value(value) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
