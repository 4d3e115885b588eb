//! Core type definitions used across the FolderHub workspace.

pub mod id;

pub use id::{DEFAULT_ORG_ID, OrgId};
