//! FolderHub demo driver.
//!
//! Loads the sample folders, builds a hierarchy store, and walks through
//! the three core operations: listing an organization, collecting the
//! descendants of a folder, and moving a subtree.

use tracing_subscriber::{EnvFilter, fmt};

use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_entity::folder::Folder;
use folderhub_service::source::to_pretty_json;
use folderhub_service::{FolderSource, HierarchyStore, JsonFileSource, RandomTreeGenerator};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Driver error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FOLDERHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Load, query, move, print
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FolderHub v{}", env!("CARGO_PKG_VERSION"));

    let org_id = config.data.default_org_id;

    // FOLDERHUB_GENERATE=1 swaps the sample file for a random forest.
    let source: Box<dyn FolderSource> = if std::env::var_os("FOLDERHUB_GENERATE").is_some() {
        Box::new(RandomTreeGenerator::new(config.generator, org_id))
    } else {
        Box::new(JsonFileSource::new(&config.data.sample_path))
    };

    let mut store = HierarchyStore::new(source.load().await?);

    println!("Folders for OrgID: {}", org_id);
    print_folders(&store.folders_by_org(org_id))?;

    match store.descendants(org_id, "alpha") {
        Ok(children) => {
            println!("\nChild folders of 'alpha':");
            print_folders(&children)?;
        }
        Err(e) => println!("Error: {}", e),
    }

    match store.move_folder("bravo", "delta") {
        Ok(folders) => {
            println!("\nFolders after moving 'bravo' under 'delta':");
            println!("{}", to_pretty_json(folders)?);
        }
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

fn print_folders(folders: &[&Folder]) -> Result<(), AppError> {
    println!("{}", to_pretty_json(folders)?);
    Ok(())
}
