//! Owned folder sequence, listing, and name resolution.

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

/// An in-memory, ordered folder collection partitioned by organization.
///
/// Reads take `&self` and moves take `&mut self`; the store has no
/// internal locking, so callers sharing it across tasks must serialize
/// access themselves (e.g. behind a `tokio::sync::RwLock`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyStore {
    pub(crate) folders: Vec<Folder>,
}

impl HierarchyStore {
    /// Creates a store over `folders` without checking them.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Creates a store and rejects sequences that break a hierarchy invariant.
    pub fn try_new(folders: Vec<Folder>) -> AppResult<Self> {
        let store = Self::new(folders);
        store.check_invariants()?;
        Ok(store)
    }

    /// All folders in store order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Consumes the store, returning its folders.
    pub fn into_folders(self) -> Vec<Folder> {
        self.folders
    }

    /// Number of folders across all organizations.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Distinct organizations in order of first appearance.
    pub fn organizations(&self) -> Vec<OrgId> {
        let mut orgs: Vec<OrgId> = Vec::new();
        for folder in &self.folders {
            if !orgs.contains(&folder.org_id) {
                orgs.push(folder.org_id);
            }
        }
        orgs
    }

    /// Lists every folder of an organization in store order.
    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|f| f.org_id == org_id)
            .collect()
    }

    /// Finds the first folder named `name` in an organization.
    pub fn find(&self, org_id: OrgId, name: &str) -> AppResult<&Folder> {
        self.folders
            .iter()
            .find(|f| f.org_id == org_id && f.name == name)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Folder '{name}' does not exist in organization {org_id}"
                ))
            })
    }

    /// Resolves a full path within an organization.
    pub fn find_by_path(&self, org_id: OrgId, path: &str) -> Option<&Folder> {
        self.folders
            .iter()
            .find(|f| f.org_id == org_id && f.path == path)
    }

    /// Index of the first folder named `name` anywhere in the store.
    pub(crate) fn position_by_name(&self, name: &str) -> Option<usize> {
        self.folders.iter().position(|f| f.name == name)
    }

    /// Index of the only folder named `name` in an organization.
    ///
    /// `role` names the operand ("Source", "Destination") in error messages.
    pub(crate) fn unique_position_in_org(
        &self,
        org_id: OrgId,
        name: &str,
        role: &str,
    ) -> AppResult<usize> {
        let mut matches = self
            .folders
            .iter()
            .enumerate()
            .filter(|(_, f)| f.org_id == org_id && f.name == name)
            .map(|(idx, _)| idx);

        let first = matches.next().ok_or_else(|| {
            AppError::not_found(format!(
                "{role} folder '{name}' does not exist in organization {org_id}"
            ))
        })?;

        let extra = matches.count();
        if extra > 0 {
            return Err(AppError::ambiguous(format!(
                "{role} folder name '{name}' matches {} folders in organization {org_id}",
                extra + 1
            )));
        }

        Ok(first)
    }
}

impl From<Vec<Folder>> for HierarchyStore {
    fn from(folders: Vec<Folder>) -> Self {
        Self::new(folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::{other_org, sample_folders};
    use folderhub_core::error::ErrorKind;
    use folderhub_core::types::DEFAULT_ORG_ID;

    #[test]
    fn test_folders_by_org_keeps_store_order() {
        let store = HierarchyStore::new(sample_folders());
        let names: Vec<&str> = store
            .folders_by_org(DEFAULT_ORG_ID)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta", "echo", "golf"]);
    }

    #[test]
    fn test_folders_by_unknown_org_is_empty() {
        let store = HierarchyStore::new(sample_folders());
        assert!(store.folders_by_org(OrgId::new()).is_empty());
    }

    #[test]
    fn test_find_is_scoped_to_org() {
        let store = HierarchyStore::new(sample_folders());
        assert_eq!(store.find(other_org(), "foxtrot").expect("found").path, "foxtrot");
        let err = store.find(DEFAULT_ORG_ID, "foxtrot").expect_err("foreign folder");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_organizations_first_seen_order() {
        let store = HierarchyStore::new(sample_folders());
        assert_eq!(store.organizations(), vec![DEFAULT_ORG_ID, other_org()]);
    }

    #[test]
    fn test_unique_position_detects_duplicates() {
        let mut folders = sample_folders();
        folders.push(Folder::new("bravo", "golf.bravo", DEFAULT_ORG_ID));
        let store = HierarchyStore::new(folders);

        let err = store
            .unique_position_in_org(DEFAULT_ORG_ID, "bravo", "Source")
            .expect_err("duplicate name");
        assert_eq!(err.kind, ErrorKind::Ambiguous);
        assert_eq!(
            store.unique_position_in_org(DEFAULT_ORG_ID, "delta", "Source").expect("unique"),
            3
        );
    }
}
