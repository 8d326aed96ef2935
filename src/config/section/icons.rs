//! `[icons]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Icon copy stage and icon-name codegen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Icon directory, relative to the asset source root.
    pub dir: PathBuf,

    /// Extension (without dot) an icon file must carry to qualify.
    pub extension: String,

    /// Name of the JSON file listing all icon names, written next to the
    /// copied icons in each destination.
    pub names_file: String,

    /// Generated source file with the icon-name union type and list.
    pub types_file: PathBuf,

    /// Union type name in the generated file.
    pub type_name: String,

    /// Runtime list constant name in the generated file.
    pub list_name: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("icons/icon"),
            extension: "svg".to_string(),
            names_file: "icon-names.json".to_string(),
            types_file: PathBuf::from("packages/ui/src/icon-types.ts"),
            type_name: "IconType".to_string(),
            list_name: "iconTypes".to_string(),
        }
    }
}
