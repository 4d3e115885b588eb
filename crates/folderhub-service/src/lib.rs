//! # folderhub-service
//!
//! The materialized-path hierarchy engine and the collaborators that feed
//! it. [`HierarchyStore`] owns an ordered folder sequence and answers
//! organization-scoped structural queries and validated subtree moves;
//! [`source`] provides the JSON file loader and the random forest
//! generator behind the [`FolderSource`] trait.

pub mod hierarchy;
pub mod source;

pub use hierarchy::HierarchyStore;
pub use source::{FolderSource, JsonFileSource, RandomTreeGenerator};
