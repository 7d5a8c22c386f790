//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::build::{self, BuildArgs, CheckArgs};
use super::output::{Output, OutputFormat};
use crate::domain::ParamKind;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "annotate")]
#[command(author, version, about = "Generate engine plugin annotation blocks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter annotate.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Render annotation blocks from a plugin schema
    Build(BuildArgs),

    /// Report values missing a translation
    Check(CheckArgs),

    /// List the parameter types the encoder understands
    Kinds,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let output = Output::new(config.output_format(cli.format), cli.verbose);

    output.verbose("annotate starting");
    match &config.project_root {
        Some(root) => output.verbose_ctx("config", &format!("Project root: {}", root.display())),
        None => output.verbose_ctx("config", "No annotate.toml found, using defaults"),
    }

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing at: {}", path));
            if Config::init_project(std::path::Path::new(&path))? {
                output.success(&format!("Created annotate.toml in {}", path));
            } else {
                output.success(&format!("annotate.toml already exists in {}", path));
            }
        }

        Commands::Build(args) => build::build(&output, &config, args)?,
        Commands::Check(args) => build::check(&output, &config, args)?,

        Commands::Kinds => {
            let kinds: Vec<String> = ParamKind::all().iter().map(ToString::to_string).collect();
            if output.is_json() {
                output.data(&kinds);
            } else {
                for kind in kinds {
                    println!("{}", kind);
                }
            }
        }
    }

    Ok(())
}
