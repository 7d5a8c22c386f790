//! Configuration handling for the annotation builder
//!
//! Build settings are stored in `annotate.toml` (project) and
//! `~/.config/plugin-annotation/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotation::BuildOptions;

/// File name of the project build configuration
pub const PROJECT_CONFIG_FILE: &str = "annotate.toml";

/// Language used when nothing else names one
pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Project-level build configuration (`annotate.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Languages to render, in output order
    pub languages: Vec<String>,

    /// Fallback language; its blocks are unsuffixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Report missing localizations as warnings
    pub strict: bool,

    /// Where to write the annotation (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl ProjectConfig {
    /// The configuration written by `annotate init`
    pub fn starter() -> Self {
        Self {
            languages: vec![FALLBACK_LANGUAGE.to_string()],
            default_language: Some(FALLBACK_LANGUAGE.to_string()),
            strict: false,
            output: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::Invalid("languages must not contain empty codes".to_string()));
        }
        if self.default_language.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(ConfigError::Invalid("default_language must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Default language when a project does not name one
    pub default_language: Option<String>,
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let (project, project_root) = Self::load_project()?;

        Ok(Self {
            project,
            global,
            project_root,
        })
    }

    /// Loads configuration for a specific project directory
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project_config(project_root)?;

        Ok(Self {
            project,
            global,
            project_root: Some(project_root.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "plugin-annotation", "plugin-annotation")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Finds and loads project configuration
    fn load_project() -> Result<(ProjectConfig, Option<PathBuf>)> {
        match Self::find_project_root() {
            Some(root) => {
                let config = Self::load_project_config(&root)?;
                Ok((config, Some(root)))
            }
            None => Ok((ProjectConfig::default(), None)),
        }
    }

    /// Loads project configuration from a specific root
    fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(PROJECT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;

        config
            .validate()
            .with_context(|| format!("Invalid project config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Finds the project root by looking for `annotate.toml` from the current directory
    pub fn find_project_root() -> Option<PathBuf> {
        Self::find_project_root_from(&std::env::current_dir().ok()?)
    }

    /// Walks up from `start` to the first directory holding `annotate.toml`
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the effective default language
    ///
    /// Precedence: `flag` > project file > global file > built-in fallback.
    pub fn default_language(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.project.default_language.clone())
            .or_else(|| self.global.default_language.clone())
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
    }

    /// Builds encoder options from flags and configuration
    ///
    /// With no languages in flags or the project file, only the default
    /// language is rendered.
    pub fn build_options(
        &self,
        languages: &[String],
        default_language: Option<&str>,
    ) -> BuildOptions {
        let default_language = self.default_language(default_language);

        let languages = if !languages.is_empty() {
            languages.to_vec()
        } else if !self.project.languages.is_empty() {
            self.project.languages.clone()
        } else {
            vec![default_language.clone()]
        };

        BuildOptions {
            languages,
            default_language,
        }
    }

    /// Returns the effective output format
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.global.default_format)
    }

    /// Writes a starter `annotate.toml` into `root` unless one exists
    ///
    /// Returns true if a file was written.
    pub fn init_project(root: &Path) -> Result<bool> {
        let config_path = root.join(PROJECT_CONFIG_FILE);
        if config_path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory: {}", root.display()))?;

        let content = toml::to_string_pretty(&ProjectConfig::starter())
            .context("Failed to serialize project config")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write project config: {}", config_path.display()))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with(project: ProjectConfig, global: GlobalConfig) -> Config {
        Config {
            project,
            global,
            project_root: None,
        }
    }

    #[test]
    fn default_config() {
        let config = config_with(ProjectConfig::default(), GlobalConfig::default());

        assert_eq!(config.global.default_format, OutputFormat::Text);
        assert!(config.project_root.is_none());
        assert_eq!(config.build_options(&[], None), BuildOptions::single("en"));
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
languages = ["en", "ja"]
default_language = "en"
strict = true
output = "js/plugins/Demo.annotation.js"
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.languages, vec!["en", "ja"]);
        assert_eq!(config.default_language.as_deref(), Some("en"));
        assert!(config.strict);
        assert_eq!(
            config.output,
            Some(PathBuf::from("js/plugins/Demo.annotation.js"))
        );
    }

    #[test]
    fn parse_global_config() {
        let toml = r#"
default_format = "json"
default_language = "ja"
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.default_language, Some("ja".to_string()));
    }

    #[test]
    fn flags_override_project_and_global() {
        let project = ProjectConfig {
            languages: vec!["en".into(), "ja".into()],
            default_language: Some("ja".into()),
            ..Default::default()
        };
        let global = GlobalConfig {
            default_language: Some("de".into()),
            ..Default::default()
        };
        let config = config_with(project, global);

        assert_eq!(
            config.build_options(&[], None),
            BuildOptions::new(["en", "ja"], "ja")
        );
        assert_eq!(
            config.build_options(&["fr".to_string()], Some("en")),
            BuildOptions::new(["fr"], "en")
        );
    }

    #[test]
    fn global_default_language_used_without_project() {
        let global = GlobalConfig {
            default_language: Some("ja".into()),
            ..Default::default()
        };
        let config = config_with(ProjectConfig::default(), global);

        assert_eq!(config.build_options(&[], None), BuildOptions::single("ja"));
    }

    #[test]
    fn output_format_flag_wins() {
        let global = GlobalConfig {
            default_format: OutputFormat::Json,
            ..Default::default()
        };
        let config = config_with(ProjectConfig::default(), global);

        assert_eq!(config.output_format(None), OutputFormat::Json);
        assert_eq!(config.output_format(Some(OutputFormat::Text)), OutputFormat::Text);
    }

    #[test]
    fn empty_language_code_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "languages = [\"en\", \"\"]\n").unwrap();

        assert!(Config::for_project(dir.path()).is_err());
    }

    #[test]
    fn init_project_is_idempotent() {
        let dir = TempDir::new().unwrap();

        assert!(Config::init_project(dir.path()).unwrap());
        assert!(!Config::init_project(dir.path()).unwrap());

        let config = Config::for_project(dir.path()).unwrap();
        assert_eq!(config.project, ProjectConfig::starter());
    }

    #[test]
    fn find_project_root_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        assert_eq!(
            Config::find_project_root_from(&sub_dir),
            Some(dir.path().to_path_buf())
        );
        assert_eq!(
            Config::find_project_root_from(dir.path()),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn find_project_root_ignores_directory_named_like_config() {
        let dir = TempDir::new().unwrap();
        let outer = dir.path().join("outer");
        fs::create_dir_all(outer.join(PROJECT_CONFIG_FILE)).unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        assert_eq!(
            Config::find_project_root_from(&outer),
            Some(dir.path().to_path_buf())
        );
    }
}
