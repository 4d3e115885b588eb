//! Folder data source configuration.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_ORG_ID, OrgId};

/// Where folder records come from and which organization is assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON sample file.
    #[serde(default = "default_sample_path")]
    pub sample_path: String,
    /// Organization used by commands that are not given one.
    #[serde(default = "default_org_id")]
    pub default_org_id: OrgId,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sample_path: default_sample_path(),
            default_org_id: default_org_id(),
        }
    }
}

fn default_sample_path() -> String {
    "data/sample.json".to_string()
}

fn default_org_id() -> OrgId {
    DEFAULT_ORG_ID
}
