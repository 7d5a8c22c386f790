//! Block assembly
//!
//! For every requested language this renders the main block (identity,
//! dependencies, help, assets, parameters, commands) followed by one block
//! per declared struct. The default language's blocks carry no language
//! suffix in their header; the loader treats those as canonical.

use super::lines::Lines;
use super::locale::Locale;
use super::param::encode_parameter;
use super::{AnnotationError, BuildOptions};
use crate::domain::{PluginConfig, PluginStruct};

/// Renders the annotation text for every language in `options`
pub fn generate(config: &PluginConfig, options: &BuildOptions) -> Result<String, AnnotationError> {
    let legacy = config.is_legacy();

    let rendered = options
        .languages
        .iter()
        .map(|language| {
            let locale = Locale::new(language, &options.default_language);
            render_language(config, &locale, legacy)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(trim_line_ends(&rendered.join("\n\n")))
}

fn render_language(
    config: &PluginConfig,
    locale: &Locale<'_>,
    legacy: bool,
) -> Result<String, AnnotationError> {
    let mut blocks = vec![render_main(config, locale, legacy)?];
    for plugin_struct in &config.structs {
        blocks.push(render_struct(plugin_struct, locale, legacy)?);
    }
    Ok(blocks.join("\n\n"))
}

fn language_suffix<'a>(locale: &Locale<'a>) -> &'a str {
    if locale.is_default() {
        ""
    } else {
        locale.language()
    }
}

fn render_main(
    config: &PluginConfig,
    locale: &Locale<'_>,
    legacy: bool,
) -> Result<String, AnnotationError> {
    let mut lines = Lines::new();

    // identity
    for target in &config.target {
        lines.push("target", target.as_str());
    }
    lines.push("plugindesc", locale.resolve(&config.title));
    if let Some(version) = &config.version {
        lines.push("version", locale.resolve(version));
    }
    lines.push("author", locale.resolve(&config.author));
    if let Some(license) = &config.license {
        lines.push("license", locale.resolve(license));
    }
    if let Some(url) = &config.url {
        lines.push("url", locale.resolve(url));
    }
    lines.end_section();

    // dependencies
    for base in &config.base {
        lines.push("base", base);
    }
    for after in &config.order_after {
        lines.push("orderAfter", after);
    }
    for before in &config.order_before {
        lines.push("orderBefore", before);
    }
    lines.end_section();

    if let Some(help) = &config.help {
        lines.push("help", locale.resolve(help));
    }
    lines.end_section();

    // assets
    for asset in &config.required_assets {
        lines.push("requiredAssets", asset);
    }
    lines.end_section();

    for note in &config.required_note_assets {
        lines.push("noteParam", &note.name);
        lines.push("noteDir", &note.dir);
        lines.push("noteType", &note.asset_type);
        lines.push("noteData", &note.data);
        lines.end_section();
    }

    for param in &config.params {
        encode_parameter(&mut lines, "param", param, locale, legacy)?;
        lines.end_section();
    }

    for command in &config.commands {
        lines.push("command", &command.name);
        lines.push("text", locale.resolve(&command.text));
        lines.push("desc", locale.resolve(&command.description));
        lines.end_section();

        for arg in &command.args {
            encode_parameter(&mut lines, "arg", arg, locale, legacy)?;
            lines.end_section();
        }
    }

    Ok(lines.into_block(&format!("/*:{}", language_suffix(locale))))
}

fn render_struct(
    plugin_struct: &PluginStruct,
    locale: &Locale<'_>,
    legacy: bool,
) -> Result<String, AnnotationError> {
    let mut lines = Lines::with_leading_blank();

    for param in &plugin_struct.params {
        encode_parameter(&mut lines, "param", param, locale, legacy)?;
        lines.end_section();
    }

    Ok(lines.into_block(&format!(
        "/*~struct~{}:{}",
        plugin_struct.name,
        language_suffix(locale)
    )))
}

/// Strips trailing whitespace from every line, keeping the line breaks
fn trim_line_ends(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
