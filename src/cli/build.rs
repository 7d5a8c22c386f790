//! Annotation build and localization check commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use super::output::Output;
use crate::annotation::{generate, missing_localizations, BuildOptions, MissingLocalization};
use crate::domain::PluginConfig;
use crate::storage::{load_schema, write_atomic, Config};

/// Language selection shared by `build` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct LanguageArgs {
    /// Language to render (repeatable; defaults to annotate.toml, then the default language)
    #[arg(long = "lang", short = 'l')]
    pub languages: Vec<String>,

    /// Fallback language whose blocks are unsuffixed
    #[arg(long)]
    pub default_lang: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Plugin schema (.json, .yaml, .yml or .toml)
    pub schema: PathBuf,

    #[command(flatten)]
    pub languages: LanguageArgs,

    /// Write the annotation to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Warn about values missing a translation
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Plugin schema (.json, .yaml, .yml or .toml)
    pub schema: PathBuf,

    #[command(flatten)]
    pub languages: LanguageArgs,
}

fn load(
    output: &Output,
    config: &Config,
    schema: &Path,
    args: &LanguageArgs,
) -> Result<(PluginConfig, BuildOptions)> {
    output.verbose_ctx("schema", &format!("Loading schema: {}", schema.display()));
    let plugin = load_schema(schema)?;

    let options = config.build_options(&args.languages, args.default_lang.as_deref());
    output.verbose_ctx(
        "schema",
        &format!(
            "Languages: {}, default: {}",
            options.languages.join(", "),
            options.default_language
        ),
    );

    Ok((plugin, options))
}

fn report_missing(output: &Output, missing: &[MissingLocalization]) {
    for entry in missing {
        output.warn(&format!("Missing localization {}", entry));
    }
}

pub fn build(output: &Output, config: &Config, args: BuildArgs) -> Result<()> {
    let (plugin, options) = load(output, config, &args.schema, &args.languages)?;

    if args.strict || config.project.strict {
        report_missing(output, &missing_localizations(&plugin, &options));
    }

    let text = generate(&plugin, &options)
        .with_context(|| format!("Failed to generate annotation for {}", args.schema.display()))?;
    output.verbose_ctx("build", &format!("Generated {} lines", text.lines().count()));

    let target = args.output.or_else(|| {
        config.project.output.as_ref().map(|path| match &config.project_root {
            Some(root) => root.join(path),
            None => path.clone(),
        })
    });

    match target {
        Some(path) => {
            write_atomic(&path, &format!("{}\n", text))?;
            if output.is_json() {
                output.data(&serde_json::json!({
                    "success": true,
                    "output": path.display().to_string(),
                    "languages": options.languages,
                }));
            } else {
                output.success(&format!("Wrote annotation to {}", path.display()));
            }
        }
        None => {
            if output.is_json() {
                output.data(&serde_json::json!({ "annotation": text }));
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}

pub fn check(output: &Output, config: &Config, args: CheckArgs) -> Result<()> {
    let (plugin, options) = load(output, config, &args.schema, &args.languages)?;
    let missing = missing_localizations(&plugin, &options);

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": missing.is_empty(),
            "missing": missing,
        }));
    } else {
        report_missing(output, &missing);
    }

    if !missing.is_empty() {
        anyhow::bail!("{} missing localization(s)", missing.len());
    }

    if !output.is_json() {
        output.success(&format!(
            "All localized values resolve for: {}",
            options.languages.join(", ")
        ));
    }

    Ok(())
}
