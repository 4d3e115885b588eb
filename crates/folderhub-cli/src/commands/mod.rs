//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod generate;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;
use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_service::{FolderSource, HierarchyStore, JsonFileSource, RandomTreeGenerator};

/// FolderHub: organization-scoped folder hierarchies
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Where folder records come from
    #[command(flatten)]
    pub source: SourceArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Folder data source selection
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Folder data file (defaults to `data.sample_path`)
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    /// Use a randomly generated forest instead of a data file
    #[arg(long, global = true, conflicts_with = "input")]
    pub generate: bool,

    /// Seed for the random generator
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder queries and moves
    Folder(folder::FolderArgs),
    /// Write a random sample data file
    Generate(generate::GenerateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => {
                folder::execute(args, &self.source, &self.config, self.format).await
            }
            Commands::Generate(args) => {
                generate::execute(args, &self.source, &self.config).await
            }
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub async fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the random generator described by config and flags
pub fn build_generator(source: &SourceArgs, config: &AppConfig) -> RandomTreeGenerator {
    let generator = RandomTreeGenerator::new(config.generator, config.data.default_org_id);
    match source.seed {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    }
}

/// Helper: load folders from the selected source into a store
pub async fn open_store(
    source: &SourceArgs,
    config: &AppConfig,
) -> Result<HierarchyStore, AppError> {
    let folder_source: Box<dyn FolderSource> = if source.generate {
        Box::new(build_generator(source, config))
    } else {
        let path = source
            .input
            .clone()
            .unwrap_or_else(|| config.data.sample_path.clone());
        Box::new(JsonFileSource::new(path))
    };

    tracing::info!(source = %folder_source.describe(), "Loading folders");
    let store = HierarchyStore::new(folder_source.load().await?);

    if let Err(e) = store.check_invariants() {
        tracing::warn!(error = %e, "Folder data violates hierarchy invariants");
    }

    Ok(store)
}
