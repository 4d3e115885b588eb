//! Property-based checks of descendant queries and subtree moves over
//! randomly generated forests.

use std::collections::HashSet;

use folderhub_core::config::generator::GeneratorConfig;
use folderhub_core::error::ErrorKind;
use folderhub_core::types::DEFAULT_ORG_ID;
use folderhub_entity::folder::Folder;
use folderhub_service::{HierarchyStore, RandomTreeGenerator};
use proptest::prelude::*;

/// Strategy for small generated forests (seed plus bounds).
fn forest_strategy() -> impl Strategy<Value = Vec<Folder>> {
    (any::<u64>(), 1usize..=4, 1usize..=3, 1usize..=4).prop_map(
        |(seed, max_root_set, max_child, max_depth)| {
            let config = GeneratorConfig {
                max_root_set,
                max_child,
                max_depth,
            };
            RandomTreeGenerator::new(config, DEFAULT_ORG_ID)
                .with_seed(seed)
                .generate()
        },
    )
}

/// A forest together with two folder indexes into it.
fn forest_with_pair() -> impl Strategy<Value = (Vec<Folder>, usize, usize)> {
    forest_strategy().prop_flat_map(|folders| {
        let len = folders.len();
        (Just(folders), 0..len, 0..len)
    })
}

fn starts_below(candidate: &str, ancestor: &str) -> bool {
    candidate.starts_with(&format!("{ancestor}."))
}

proptest! {
    #[test]
    fn descendants_are_prefix_closed_and_complete((folders, pick, _) in forest_with_pair()) {
        let store = HierarchyStore::new(folders.clone());
        let target = &folders[pick];

        let result = store
            .descendants(target.org_id, &target.name)
            .expect("generated names resolve");

        for d in &result {
            prop_assert_eq!(d.org_id, target.org_id);
            prop_assert!(starts_below(&d.path, &target.path));
        }

        let expected: HashSet<&str> = folders
            .iter()
            .filter(|f| f.org_id == target.org_id && starts_below(&f.path, &target.path))
            .map(|f| f.path.as_str())
            .collect();
        let actual: HashSet<&str> = result.iter().map(|f| f.path.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn moves_rewrite_exactly_the_subtree((folders, src, dst) in forest_with_pair()) {
        let source = folders[src].clone();
        let destination = folders[dst].clone();
        let mut store = HierarchyStore::new(folders.clone());

        match store.move_folder(&source.name, &destination.name) {
            Ok(after) => {
                prop_assert_eq!(after.len(), folders.len());
                let new_prefix = format!("{}.{}", destination.path, source.name);

                for (before, now) in folders.iter().zip(after.iter()) {
                    prop_assert_eq!(&before.name, &now.name);
                    prop_assert_eq!(before.org_id, now.org_id);

                    let in_subtree = before.org_id == source.org_id
                        && (before.path == source.path || starts_below(&before.path, &source.path));
                    if in_subtree {
                        let suffix = &before.path[source.path.len()..];
                        prop_assert_eq!(now.path.clone(), format!("{new_prefix}{suffix}"));
                    } else {
                        prop_assert_eq!(&before.path, &now.path);
                    }
                }

                prop_assert!(store.check_invariants().is_ok());
            }
            Err(err) => {
                prop_assert!(matches!(
                    err.kind,
                    ErrorKind::CrossOrgMove | ErrorKind::NoOpMove | ErrorKind::CyclicMove
                ));
                prop_assert_eq!(store.folders(), folders.as_slice());
            }
        }
    }

    #[test]
    fn rejected_moves_match_their_reason((folders, src, dst) in forest_with_pair()) {
        let source = &folders[src];
        let destination = &folders[dst];
        let mut store = HierarchyStore::new(folders.clone());

        let outcome = store.move_folder(&source.name, &destination.name).map(|_| ());
        let expected = if source.org_id != destination.org_id {
            Some(ErrorKind::CrossOrgMove)
        } else if source.path == destination.path {
            Some(ErrorKind::NoOpMove)
        } else if starts_below(&destination.path, &source.path) {
            Some(ErrorKind::CyclicMove)
        } else {
            None
        };

        prop_assert_eq!(outcome.err().map(|e| e.kind), expected);
    }
}
