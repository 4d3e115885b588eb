//! Folder entity model.

use folderhub_core::types::OrgId;
use serde::{Deserialize, Serialize};

use super::path;

/// A folder in an organization's hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name; equals the final segment of `path`.
    pub name: String,
    /// Full materialized path (e.g., `alpha.bravo.charlie`).
    #[serde(alias = "paths")]
    pub path: String,
    /// The organization this folder belongs to.
    pub org_id: OrgId,
}

impl Folder {
    /// Create a folder record from its parts.
    pub fn new(name: impl Into<String>, path: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            org_id,
        }
    }

    /// Create a root folder whose path is its own name.
    pub fn root(name: impl Into<String>, org_id: OrgId) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            org_id,
        }
    }

    /// Create a child of `self` in the same organization.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: path::join(&self.path, &name),
            name,
            org_id: self.org_id,
        }
    }

    /// Check if this is a root folder (no delimiter in its path).
    pub fn is_root(&self) -> bool {
        path::parent(&self.path).is_none()
    }

    /// Path of the parent folder, `None` for roots.
    pub fn parent_path(&self) -> Option<&str> {
        path::parent(&self.path)
    }

    /// Depth in the folder tree (1 for roots).
    pub fn depth(&self) -> usize {
        path::depth(&self.path)
    }

    /// Whether `self` lies strictly below `other` in the same organization.
    pub fn is_descendant_of(&self, other: &Folder) -> bool {
        self.org_id == other.org_id && path::is_descendant(&self.path, &other.path)
    }
}
