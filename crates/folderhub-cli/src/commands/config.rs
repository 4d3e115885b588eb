//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use folderhub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path).await?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path).await {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Sample data", &config.data.sample_path);
                output::print_kv("Default org", &config.data.default_org_id.to_string());
                output::print_kv(
                    "Generator",
                    &format!(
                        "roots={} children<={} depth<={}",
                        config.generator.max_root_set,
                        config.generator.max_child,
                        config.generator.max_depth
                    ),
                );
                output::print_kv(
                    "Logging",
                    &format!("{} ({})", config.logging.level, config.logging.format),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
