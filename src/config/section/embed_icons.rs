//! `[embed_icons]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Embed-icon copy stage settings. These are copied byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedIconsConfig {
    /// Embed-icon directory, relative to the asset source root.
    pub dir: PathBuf,

    /// Extension (without dot) a file must carry to qualify.
    pub extension: String,
}

impl Default for EmbedIconsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("embed-icons"),
            extension: "png".to_string(),
        }
    }
}
