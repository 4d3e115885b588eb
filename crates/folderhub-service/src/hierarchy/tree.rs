//! Nested tree view of an organization's forest.

use std::collections::HashMap;

use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, FolderNode, FolderTree};

use super::store::HierarchyStore;

impl HierarchyStore {
    /// Builds the folder forest of an organization.
    ///
    /// Roots and siblings keep store order. Folders whose parent record is
    /// missing are not reachable from a root and are left out.
    pub fn tree(&self, org_id: OrgId) -> FolderTree {
        let mut roots: Vec<&Folder> = Vec::new();
        let mut children_of: HashMap<&str, Vec<&Folder>> = HashMap::new();

        for folder in self.folders.iter().filter(|f| f.org_id == org_id) {
            match folder.parent_path() {
                Some(parent) => children_of.entry(parent).or_default().push(folder),
                None => roots.push(folder),
            }
        }

        if roots.is_empty() {
            return FolderTree::empty(org_id);
        }

        let roots = roots
            .into_iter()
            .map(|root| build_node(root, &children_of))
            .collect();

        FolderTree::from_roots(org_id, roots)
    }
}

fn build_node(folder: &Folder, children_of: &HashMap<&str, Vec<&Folder>>) -> FolderNode {
    let children: Vec<FolderNode> = children_of
        .get(folder.path.as_str())
        .map(|kids| {
            kids.iter()
                .map(|child| build_node(child, children_of))
                .collect()
        })
        .unwrap_or_default();

    FolderNode {
        name: folder.name.clone(),
        path: folder.path.clone(),
        depth: folder.depth(),
        child_count: children.len(),
        children,
    }
}
