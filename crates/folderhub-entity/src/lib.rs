//! # folderhub-entity
//!
//! Domain entity models for FolderHub. The only stored entity is the
//! [`Folder`](folder::Folder); its position in the hierarchy is a
//! materialized, dot-delimited path. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod folder;

pub use folder::{Folder, FolderNode, FolderTree};
