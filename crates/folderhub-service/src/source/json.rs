//! JSON file loading and pretty rendering.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_entity::folder::Folder;

use super::FolderSource;

/// Reads folders from a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FolderSource for JsonFileSource {
    async fn load(&self) -> AppResult<Vec<Folder>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Load,
                format!("Failed to read '{}': {e}", self.path.display()),
                e,
            )
        })?;

        let folders: Vec<Folder> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::with_source(
                ErrorKind::Load,
                format!("Failed to decode '{}': {e}", self.path.display()),
                e,
            )
        })?;

        info!(
            path = %self.path.display(),
            count = folders.len(),
            "Loaded folders"
        );

        Ok(folders)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Renders a value as JSON indented with tabs.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| {
        AppError::with_source(ErrorKind::Serialization, "Rendered JSON is not UTF-8", e)
    })
}

/// Writes folders to `path` as pretty JSON, creating parent directories.
pub async fn write_folders(path: &Path, folders: &[Folder]) -> AppResult<()> {
    let json = to_pretty_json(folders)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to create '{}': {e}", parent.display()),
                e,
            )
        })?;
    }

    tokio::fs::write(path, json).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to write '{}': {e}", path.display()),
            e,
        )
    })?;

    info!(path = %path.display(), count = folders.len(), "Wrote folders");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folderhub_core::types::DEFAULT_ORG_ID;

    #[test]
    fn test_pretty_json_uses_tabs() {
        let folders = vec![Folder::root("alpha", DEFAULT_ORG_ID)];
        let json = to_pretty_json(&folders).expect("render");
        assert!(json.starts_with("[\n\t{\n\t\t\"name\": \"alpha\""));
        assert!(json.contains("\t\t\"path\": \"alpha\""));
    }

    #[test]
    fn test_pretty_json_empty_slice() {
        let folders: Vec<Folder> = Vec::new();
        assert_eq!(to_pretty_json(&folders).expect("render"), "[]");
    }
}
