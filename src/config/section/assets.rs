//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! source = "assets"                     # canonical asset tree
//! destinations = ["packages/assets"]    # package roots receiving copies
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source tree and destination package roots for the copy stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Root directory containing the canonical asset subfolders
    /// (`icons/`, `embed-icons/`, `fonts/`, `translations/`).
    pub source: PathBuf,

    /// Package roots that receive mirrored asset folders and the generated
    /// accessor modules. Every root gets an identical copy.
    pub destinations: Vec<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets"),
            destinations: vec![PathBuf::from("packages/assets")],
        }
    }
}
