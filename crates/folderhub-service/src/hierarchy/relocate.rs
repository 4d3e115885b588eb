//! Validated subtree moves.
//!
//! A move re-parents a folder by rewriting the leading segments of its own
//! path and of every path below it. Nothing is written until every check
//! has passed, so a rejected move leaves the store exactly as it was.

use std::collections::HashSet;

use folderhub_core::error::AppError;
use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, path};
use tracing::{info, warn};

use super::store::HierarchyStore;

/// Prefix rewrite computed for an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MovePlan {
    org_id: OrgId,
    old_prefix: String,
    new_prefix: String,
}

impl HierarchyStore {
    /// Moves the first folder named `source` under the first folder named
    /// `destination`, searching the whole store.
    ///
    /// Names are resolved without an organization, so a name shared by
    /// two tenants resolves to whichever comes first; a resulting pair from
    /// different organizations is rejected with `CrossOrgMove`. Prefer
    /// [`HierarchyStore::move_folder_in_org`] when the organization is known.
    pub fn move_folder(&mut self, source: &str, destination: &str) -> AppResult<&[Folder]> {
        let src = self
            .position_by_name(source)
            .ok_or_else(|| AppError::not_found(format!("Source folder '{source}' does not exist")))?;
        let dst = self.position_by_name(destination).ok_or_else(|| {
            AppError::not_found(format!("Destination folder '{destination}' does not exist"))
        })?;

        self.relocate(src, dst)
    }

    /// Moves `source` under `destination`, both resolved inside `org_id`.
    ///
    /// A name that matches more than one folder in the organization fails
    /// with `Ambiguous` instead of silently picking the first.
    pub fn move_folder_in_org(
        &mut self,
        org_id: OrgId,
        source: &str,
        destination: &str,
    ) -> AppResult<&[Folder]> {
        let src = self.unique_position_in_org(org_id, source, "Source")?;
        let dst = self.unique_position_in_org(org_id, destination, "Destination")?;

        self.relocate(src, dst)
    }

    fn relocate(&mut self, src: usize, dst: usize) -> AppResult<&[Folder]> {
        let plan = self.plan_move(src, dst).inspect_err(|e| {
            warn!(
                source = %self.folders[src].path,
                destination = %self.folders[dst].path,
                error = %e,
                "Folder move rejected"
            );
        })?;

        let moved = self.apply_move(&plan);

        info!(
            org_id = %plan.org_id,
            from = %plan.old_prefix,
            to = %plan.new_prefix,
            moved,
            "Folder moved"
        );

        Ok(self.folders.as_slice())
    }

    fn plan_move(&self, src: usize, dst: usize) -> AppResult<MovePlan> {
        let source = &self.folders[src];
        let destination = &self.folders[dst];

        if source.org_id != destination.org_id {
            return Err(AppError::cross_org_move(format!(
                "Cannot move folder '{}' to a different organization",
                source.name
            )));
        }

        if source.path == destination.path {
            return Err(AppError::no_op_move("Cannot move a folder to itself"));
        }

        if path::is_within(&destination.path, &source.path) {
            return Err(AppError::cyclic_move(format!(
                "Cannot move folder '{}' to a child of itself ('{}')",
                source.name, destination.name
            )));
        }

        let plan = MovePlan {
            org_id: source.org_id,
            old_prefix: source.path.clone(),
            new_prefix: path::join(&destination.path, &source.name),
        };

        self.check_collisions(&plan)?;
        Ok(plan)
    }

    /// Rejects plans whose rewritten paths would land on a folder outside
    /// the moved subtree.
    fn check_collisions(&self, plan: &MovePlan) -> AppResult<()> {
        let (subtree, outside): (Vec<&Folder>, Vec<&Folder>) = self
            .folders
            .iter()
            .filter(|f| f.org_id == plan.org_id)
            .partition(|f| path::is_within(&f.path, &plan.old_prefix));

        let occupied: HashSet<&str> = outside.iter().map(|f| f.path.as_str()).collect();

        for folder in subtree {
            let Some(rebased) = path::rebase(&folder.path, &plan.old_prefix, &plan.new_prefix)
            else {
                continue;
            };
            if occupied.contains(rebased.as_str()) {
                return Err(AppError::path_conflict(format!(
                    "A folder at path '{rebased}' already exists"
                )));
            }
        }

        Ok(())
    }

    fn apply_move(&mut self, plan: &MovePlan) -> usize {
        let mut moved = 0;
        for folder in self.folders.iter_mut().filter(|f| f.org_id == plan.org_id) {
            if let Some(rebased) = path::rebase(&folder.path, &plan.old_prefix, &plan.new_prefix) {
                folder.path = rebased;
                moved += 1;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::sample_folders;
    use folderhub_core::error::ErrorKind;
    use folderhub_core::types::DEFAULT_ORG_ID;

    fn path_of<'a>(folders: &'a [Folder], name: &str) -> &'a str {
        folders
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.path.as_str())
            .expect("folder present")
    }

    #[test]
    fn test_move_rewrites_subtree() {
        let mut store = HierarchyStore::new(sample_folders());
        let folders = store.move_folder("bravo", "delta").expect("move");

        assert_eq!(path_of(folders, "bravo"), "alpha.delta.bravo");
        assert_eq!(path_of(folders, "charlie"), "alpha.delta.bravo.charlie");
        assert_eq!(path_of(folders, "alpha"), "alpha");
        assert_eq!(path_of(folders, "delta"), "alpha.delta");
        assert_eq!(path_of(folders, "echo"), "alpha.delta.echo");
    }

    #[test]
    fn test_move_to_other_root() {
        let mut store = HierarchyStore::new(sample_folders());
        let folders = store.move_folder("bravo", "golf").expect("move");

        assert_eq!(path_of(folders, "bravo"), "golf.bravo");
        assert_eq!(path_of(folders, "charlie"), "golf.bravo.charlie");
    }

    #[test]
    fn test_rejections_leave_store_untouched() {
        let cases = [
            ("bravo", "charlie", ErrorKind::CyclicMove),
            ("bravo", "bravo", ErrorKind::NoOpMove),
            ("bravo", "foxtrot", ErrorKind::CrossOrgMove),
            ("ghost", "delta", ErrorKind::NotFound),
            ("bravo", "ghost", ErrorKind::NotFound),
        ];

        for (source, destination, kind) in cases {
            let mut store = HierarchyStore::new(sample_folders());
            let err = store
                .move_folder(source, destination)
                .expect_err("move should be rejected");
            assert_eq!(err.kind, kind, "{source} -> {destination}");
            assert_eq!(store.folders(), sample_folders().as_slice());
        }
    }

    #[test]
    fn test_move_under_current_parent_is_unchanged() {
        let mut store = HierarchyStore::new(sample_folders());
        let folders = store.move_folder("bravo", "alpha").expect("move");
        assert_eq!(folders, sample_folders().as_slice());
    }

    #[test]
    fn test_move_onto_existing_path_conflicts() {
        let mut folders = sample_folders();
        folders.push(Folder::new("bravo", "golf.bravo", DEFAULT_ORG_ID));
        let mut store = HierarchyStore::new(folders.clone());

        let err = store.move_folder("bravo", "golf").expect_err("conflict");
        assert_eq!(err.kind, ErrorKind::PathConflict);
        assert_eq!(store.folders(), folders.as_slice());
    }

    #[test]
    fn test_scoped_move_rejects_ambiguous_names() {
        let mut folders = sample_folders();
        folders.push(Folder::new("delta", "golf.delta", DEFAULT_ORG_ID));
        let mut store = HierarchyStore::new(folders);

        let err = store
            .move_folder_in_org(DEFAULT_ORG_ID, "bravo", "delta")
            .expect_err("ambiguous");
        assert_eq!(err.kind, ErrorKind::Ambiguous);
    }

    #[test]
    fn test_scoped_move_cannot_see_other_org() {
        let mut store = HierarchyStore::new(sample_folders());
        let err = store
            .move_folder_in_org(DEFAULT_ORG_ID, "bravo", "foxtrot")
            .expect_err("foreign destination");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_scoped_move_rewrites_subtree() {
        let mut store = HierarchyStore::new(sample_folders());
        let folders = store
            .move_folder_in_org(DEFAULT_ORG_ID, "delta", "charlie")
            .expect("move");
        assert_eq!(path_of(folders, "delta"), "alpha.bravo.charlie.delta");
        assert_eq!(path_of(folders, "echo"), "alpha.bravo.charlie.delta.echo");
    }
}
