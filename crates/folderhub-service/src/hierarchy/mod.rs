//! Folder hierarchy store and its operations.
//!
//! The store is split by concern: resolution and listing live in
//! [`store`], read-only structural queries in [`query`], subtree moves in
//! [`relocate`], the forest view in [`tree`], and structural checks in
//! [`invariants`]. All of them are `impl HierarchyStore` blocks.

pub mod invariants;
pub mod query;
pub mod relocate;
pub mod store;
pub mod tree;

pub use store::HierarchyStore;
