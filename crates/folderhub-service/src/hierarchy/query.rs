//! Read-only structural queries over the materialized paths.

use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, path};
use tracing::debug;

use super::store::HierarchyStore;

impl HierarchyStore {
    /// Returns every descendant of the first folder named `name` in an
    /// organization, in store order.
    ///
    /// A leaf yields an empty list. Fails with `NotFound` when the
    /// organization has no folder of that name.
    pub fn descendants(&self, org_id: OrgId, name: &str) -> AppResult<Vec<&Folder>> {
        let target = self.find(org_id, name)?;

        let descendants: Vec<&Folder> = self
            .folders
            .iter()
            .filter(|f| f.org_id == org_id && path::is_descendant(&f.path, &target.path))
            .collect();

        debug!(
            org_id = %org_id,
            path = %target.path,
            count = descendants.len(),
            "Collected descendants"
        );

        Ok(descendants)
    }

    /// Returns the direct children of the first folder named `name`.
    pub fn children(&self, org_id: OrgId, name: &str) -> AppResult<Vec<&Folder>> {
        let target = self.find(org_id, name)?;

        Ok(self
            .folders
            .iter()
            .filter(|f| f.org_id == org_id && f.parent_path() == Some(target.path.as_str()))
            .collect())
    }

    /// Breadcrumb trail from the root down to (excluding) the named folder.
    ///
    /// Ancestor paths with no matching record are skipped.
    pub fn ancestors(&self, org_id: OrgId, name: &str) -> AppResult<Vec<&Folder>> {
        let target = self.find(org_id, name)?;

        Ok(path::ancestors(&target.path)
            .into_iter()
            .filter_map(|p| self.find_by_path(org_id, p))
            .collect())
    }
}
