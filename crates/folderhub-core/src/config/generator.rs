//! Random sample-tree generator bounds.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Bounds for the random folder forest generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of root trees to generate.
    #[serde(default = "default_max_root_set")]
    pub max_root_set: usize,
    /// Maximum number of children per node (at least one is always created).
    #[serde(default = "default_max_child")]
    pub max_child: usize,
    /// Maximum number of path segments in a generated folder.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl GeneratorConfig {
    /// Reject bounds that cannot produce a forest.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_root_set == 0 {
            return Err(AppError::configuration(
                "generator.max_root_set must be at least 1",
            ));
        }
        if self.max_child == 0 {
            return Err(AppError::configuration(
                "generator.max_child must be at least 1",
            ));
        }
        if self.max_depth == 0 {
            return Err(AppError::configuration(
                "generator.max_depth must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_root_set: default_max_root_set(),
            max_child: default_max_child(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_root_set() -> usize {
    4
}

fn default_max_child() -> usize {
    4
}

fn default_max_depth() -> usize {
    5
}
