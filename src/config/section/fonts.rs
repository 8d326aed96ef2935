//! `[fonts]` section configuration.
//!
//! Every font file discovered in the source tree must have a role entry;
//! an unmapped font aborts the run. Roles are the logical names generated
//! accessors expose (`monospace`, `serif`, ...), decoupled from file names.
//!
//! # Example
//!
//! ```toml
//! [fonts.roles]
//! "IBMPlexMono-Medium" = "monospace"
//! "IBMPlexSerif-Medium" = "serif"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Font copy stage settings and the strict role classification table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Font directory, relative to the asset source root.
    pub dir: PathBuf,

    /// Extension (without dot) a font file must carry to qualify.
    pub extension: String,

    /// Source file base-name → canonical role name.
    pub roles: FxHashMap<String, String>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fonts"),
            extension: "woff2".to_string(),
            roles: FxHashMap::default(),
        }
    }
}
