//! Folder sources that feed a [`HierarchyStore`](crate::HierarchyStore).

pub mod generator;
pub mod json;
mod names;

use async_trait::async_trait;

use folderhub_core::result::AppResult;
use folderhub_entity::folder::Folder;

pub use generator::RandomTreeGenerator;
pub use json::{JsonFileSource, to_pretty_json, write_folders};

/// Supplies the initial folder sequence for a store.
#[async_trait]
pub trait FolderSource: Send + Sync {
    /// Produce the folder records, in the order the store should keep them.
    async fn load(&self) -> AppResult<Vec<Folder>>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
