//! `[[setters]]` entries: constant-setter splice targets.
//!
//! # Example
//!
//! ```toml
//! [[setters]]
//! file = "packages/editor/src/settings.ts"
//! defaults = "DEFAULT_EDITOR_SETTINGS"
//! getter = "getEditorSettings"
//! updater = "updateEditorSettings"
//! export = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One hand-maintained source file receiving spliced setter boilerplate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetterTarget {
    /// Target source file containing the sentinel markers.
    pub file: PathBuf,

    /// Name of the generated frozen default-snapshot constant.
    pub defaults: String,

    /// Name of the generated getter function.
    pub getter: String,

    /// Name of the generated updater function.
    pub updater: String,

    /// Whether the generated declarations are exported.
    #[serde(default)]
    pub export: bool,
}
