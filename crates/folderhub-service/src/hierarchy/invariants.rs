//! Structural invariant checks.

use std::collections::HashSet;

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{PATH_DELIMITER, path};

use super::store::HierarchyStore;

impl HierarchyStore {
    /// Verifies that the folder sequence forms well-formed forests.
    ///
    /// Checks, per folder: a non-empty name free of the delimiter, no empty
    /// path segments, a final segment equal to the name, a path unique in
    /// its organization, and (for non-roots) a parent record in the same
    /// organization. The first violation is reported as `Validation`.
    pub fn check_invariants(&self) -> AppResult<()> {
        let mut seen: HashSet<(OrgId, &str)> = HashSet::with_capacity(self.folders.len());

        for folder in &self.folders {
            if folder.name.is_empty() || folder.name.contains(PATH_DELIMITER) {
                return Err(AppError::validation(format!(
                    "Folder name '{}' is empty or contains '{PATH_DELIMITER}'",
                    folder.name
                )));
            }
            if path::segments(&folder.path).any(str::is_empty) {
                return Err(AppError::validation(format!(
                    "Folder path '{}' contains an empty segment",
                    folder.path
                )));
            }
            if path::last_segment(&folder.path) != folder.name {
                return Err(AppError::validation(format!(
                    "Folder '{}' does not match the last segment of its path '{}'",
                    folder.name, folder.path
                )));
            }
            if !seen.insert((folder.org_id, folder.path.as_str())) {
                return Err(AppError::validation(format!(
                    "Path '{}' appears more than once in organization {}",
                    folder.path, folder.org_id
                )));
            }
        }

        for folder in &self.folders {
            if let Some(parent) = folder.parent_path() {
                if !seen.contains(&(folder.org_id, parent)) {
                    return Err(AppError::validation(format!(
                        "Folder '{}' has no parent at '{parent}' in organization {}",
                        folder.path, folder.org_id
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::sample_folders;
    use folderhub_core::error::ErrorKind;
    use folderhub_core::types::DEFAULT_ORG_ID;
    use folderhub_entity::folder::Folder;

    fn rejects(folders: Vec<Folder>) {
        let err = HierarchyStore::try_new(folders).expect_err("should be invalid");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_sample_forest_is_valid() {
        assert!(HierarchyStore::try_new(sample_folders()).is_ok());
    }

    #[test]
    fn test_missing_parent() {
        rejects(vec![Folder::new("bravo", "alpha.bravo", DEFAULT_ORG_ID)]);
    }

    #[test]
    fn test_parent_in_other_org_does_not_count() {
        rejects(vec![
            Folder::new("alpha", "alpha", OrgId::new()),
            Folder::new("bravo", "alpha.bravo", DEFAULT_ORG_ID),
        ]);
    }

    #[test]
    fn test_name_must_match_last_segment() {
        rejects(vec![Folder::new("zulu", "alpha", DEFAULT_ORG_ID)]);
    }

    #[test]
    fn test_duplicate_paths() {
        rejects(vec![
            Folder::new("alpha", "alpha", DEFAULT_ORG_ID),
            Folder::new("alpha", "alpha", DEFAULT_ORG_ID),
        ]);
    }

    #[test]
    fn test_same_path_in_two_orgs_is_fine() {
        let store = HierarchyStore::try_new(vec![
            Folder::new("alpha", "alpha", DEFAULT_ORG_ID),
            Folder::new("alpha", "alpha", OrgId::new()),
        ]);
        assert!(store.is_ok());
    }

    #[test]
    fn test_empty_segment() {
        rejects(vec![
            Folder::new("alpha", "alpha", DEFAULT_ORG_ID),
            Folder::new("bravo", "alpha..bravo", DEFAULT_ORG_ID),
        ]);
    }
}
