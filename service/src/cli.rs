//! Command-line interface for rendering `mdmodels` data models.
//!
//! ```text
//! mdmodels generate -s model.yaml -t markdown -o model.md
//! mdmodels generate -s model.json -t python -c render.toml
//! mdmodels list
//! ```

use crate::generator::GeneratorRegistry;
use crate::loader::load_model;
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mdmodels_core::RenderConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Render `mdmodels` data models to documentation and source code
#[derive(Parser, Debug)]
#[command(name = "mdmodels", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a model with one generator
    Generate {
        /// Model file (`.json`, `.yaml`, `.yml`)
        #[arg(short, long)]
        schema: PathBuf,

        /// Generator name (see `list`)
        #[arg(short, long)]
        target: String,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render configuration (`.yaml`, `.yml`, `.toml`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List available generators
    List,
}

/// The `mdmodels` application
pub struct MdModelsApp {
    cli: Cli,
}

impl MdModelsApp {
    /// Create the application from parsed arguments
    #[must_use]
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Create the application from the process arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(Cli::parse())
    }

    /// Initialise logging, run the selected command and report a failure once
    #[must_use]
    pub fn run(self) -> ExitCode {
        self.init_logging();
        info!("Starting mdmodels");

        match self.execute() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                debug!("Command failed: {:?}", err);
                eprintln!("{} {err:#}", "Error:".red().bold());
                ExitCode::FAILURE
            }
        }
    }

    /// Default log directive for the `--verbose`/`--quiet` flags
    fn log_directive(&self) -> &'static str {
        if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Configure tracing subscriber; `RUST_LOG` overrides the CLI flags
    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_directive()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Run the selected command without touching global logging state
    ///
    /// # Errors
    ///
    /// Returns an error if the model, configuration or output cannot be
    /// processed.
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::Generate {
                schema,
                target,
                output,
                config,
            } => self.generate_command(schema, target, output.as_deref(), config.as_deref()),
            Commands::List => {
                Self::list_command();
                Ok(())
            }
        }
    }

    fn generate_command(
        &self,
        schema: &Path,
        target: &str,
        output: Option<&Path>,
        config: Option<&Path>,
    ) -> anyhow::Result<()> {
        let config = match config {
            Some(path) => RenderConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => RenderConfig::default(),
        };
        let registry = GeneratorRegistry::with_defaults(&config);

        let Some(generator) = registry.get(target) else {
            bail!(
                "Unknown generator '{target}'. Available: {}",
                registry.names().join(", ")
            );
        };

        let model = load_model(schema)
            .with_context(|| format!("Failed to load model {}", schema.display()))?;
        let rendered = generator
            .generate(&model)
            .with_context(|| format!("Failed to render {} with '{target}'", schema.display()))?;

        match output {
            Some(path) => {
                std::fs::write(path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                if !self.cli.quiet {
                    eprintln!(
                        "{} {} -> {}",
                        "✓".green().bold(),
                        target.cyan(),
                        path.display()
                    );
                }
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }

    fn list_command() {
        let registry = GeneratorRegistry::with_defaults(&RenderConfig::default());
        println!("{}", "Available generators:".bold());
        for generator in registry.iter() {
            println!(
                "  {:<10} {} (.{})",
                generator.name().cyan(),
                generator.description(),
                generator.get_file_extension()
            );
        }
    }
}
