//! Folder tree structures for hierarchical display.

use folderhub_core::types::OrgId;
use serde::{Deserialize, Serialize};

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Depth level (1 for roots).
    pub depth: usize,
    /// Number of direct child folders.
    pub child_count: usize,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of folders in this subtree, the node included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderNode::subtree_size)
            .sum::<usize>()
    }
}

/// The forest of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// Organization the tree belongs to.
    pub org_id: OrgId,
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty(org_id: OrgId) -> Self {
        Self {
            org_id,
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Build a tree from root nodes, counting every folder below them.
    pub fn from_roots(org_id: OrgId, roots: Vec<FolderNode>) -> Self {
        let total_folders = roots.iter().map(FolderNode::subtree_size).sum();
        Self {
            org_id,
            roots,
            total_folders,
        }
    }
}
