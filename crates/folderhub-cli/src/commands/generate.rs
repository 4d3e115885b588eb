//! Sample data generation command.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use folderhub_core::error::AppError;
use folderhub_service::source::write_folders;

use super::SourceArgs;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output file (defaults to `data.sample_path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the generate command
pub async fn execute(
    args: &GenerateArgs,
    source: &SourceArgs,
    config_path: &str,
) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let generator = super::build_generator(source, &config);

    let folders = generator.generate();
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.sample_path));

    write_folders(&out_path, &folders).await?;

    output::print_success(&format!(
        "Wrote {} folders to '{}'",
        folders.len(),
        out_path.display()
    ));
    Ok(())
}
