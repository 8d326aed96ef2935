//! `[version]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Version propagation: one canonical package.json, many version constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// package.json holding the canonical version string.
    pub source: PathBuf,

    /// Generated `version` constant files, one per target path.
    pub targets: Vec<PathBuf>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("packages/editor/package.json"),
            targets: vec![
                PathBuf::from("packages/editor/src/version.ts"),
                PathBuf::from("apps/web/src/version.ts"),
            ],
        }
    }
}
