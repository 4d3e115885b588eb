//! Folder query and move CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;

use super::SourceArgs;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List all folders of an organization
    List {
        /// Organization ID (defaults to `data.default_org_id`)
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// List every descendant of a folder
    Descendants {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Organization ID
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// List the direct children of a folder
    Children {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Organization ID
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// Show the breadcrumb trail above a folder
    Ancestors {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Organization ID
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// Show the folder tree of an organization
    Tree {
        /// Organization ID
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// Move a folder (and its subtree) under another folder
    Move {
        /// Folder to move
        #[arg(short, long)]
        source: String,
        /// New parent folder
        #[arg(short, long)]
        destination: String,
        /// Resolve both names inside this organization only
        #[arg(short, long)]
        org: Option<OrgId>,
    },
    /// Check the loaded folders for hierarchy violations
    Validate,
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    source: &SourceArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let mut store = super::open_store(source, &config).await?;
    let default_org = config.data.default_org_id;

    match &args.command {
        FolderCommand::List { org } => {
            let folders = store.folders_by_org(org.unwrap_or(default_org));
            output::print_folders(&folders, format);
        }
        FolderCommand::Descendants { name, org } => {
            let folders = store.descendants(org.unwrap_or(default_org), name)?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Children { name, org } => {
            let folders = store.children(org.unwrap_or(default_org), name)?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Ancestors { name, org } => {
            let folders = store.ancestors(org.unwrap_or(default_org), name)?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Tree { org } => {
            let tree = store.tree(org.unwrap_or(default_org));
            output::print_tree(&tree, format);
        }
        FolderCommand::Move {
            source: from,
            destination,
            org,
        } => {
            let folders = match org {
                Some(org_id) => store.move_folder_in_org(*org_id, from, destination)?,
                None => store.move_folder(from, destination)?,
            };
            let folders: Vec<_> = folders.iter().collect();
            output::print_folders(&folders, format);

            if format == OutputFormat::Table {
                output::print_success(&format!("Moved '{}' under '{}'", from, destination));
            }
        }
        FolderCommand::Validate => {
            store.check_invariants()?;
            output::print_success(&format!(
                "{} folders in {} organizations form valid hierarchies",
                store.len(),
                store.organizations().len()
            ));
        }
    }

    Ok(())
}
