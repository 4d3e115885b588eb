//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use folderhub_entity::folder::{Folder, FolderNode, FolderTree};
use folderhub_service::source::to_pretty_json;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Depth
    depth: usize,
    /// Organization
    org_id: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            path: folder.path.clone(),
            depth: folder.depth(),
            org_id: folder.org_id.to_string(),
        }
    }
}

/// Print folders as a table or as the raw records in JSON
pub fn print_folders(folders: &[&Folder], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<FolderRow> = folders.iter().map(|f| FolderRow::from(*f)).collect();
            print_list(&rows, format);
        }
        OutputFormat::Json => print_item(&folders, format),
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = to_pretty_json(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = to_pretty_json(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a folder forest, as an indented outline or JSON
pub fn print_tree(tree: &FolderTree, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{} ({} folders)", tree.org_id, tree.total_folders);
            for root in &tree.roots {
                print_node(root);
            }
        }
        OutputFormat::Json => print_item(tree, format),
    }
}

fn print_node(node: &FolderNode) {
    let indent = "  ".repeat(node.depth);
    println!("{}├── {}", indent, node.name);
    for child in &node.children {
        print_node(child);
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
