//! `[translations]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Translation copy stage and derived-file codegen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationsConfig {
    /// Translation directory, relative to the asset source root.
    pub dir: PathBuf,

    /// Extension (without dot) a translation file must carry to qualify.
    pub extension: String,

    /// Language-list source file name inside the translation directory.
    pub languages_source: String,

    /// Locale whose translation file provides the default strings and the
    /// key union type (`{default_locale}.{extension}`).
    pub default_locale: String,

    /// Generated source file holding the sorted language list.
    pub languages_file: PathBuf,

    /// Constant name for the generated language list.
    pub languages_const: String,

    /// Generated source file holding the default-locale string dump.
    pub default_file: PathBuf,

    /// Constant name for the generated default-translation dump.
    pub default_const: String,

    /// Generated source file holding the translation-key union type.
    pub keys_file: PathBuf,

    /// Union type name for translation keys.
    pub key_type_name: String,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("translations"),
            extension: "json".to_string(),
            languages_source: "languages.json".to_string(),
            default_locale: "main".to_string(),
            languages_file: PathBuf::from("packages/schema/src/translations/languages.ts"),
            languages_const: "LANGUAGES".to_string(),
            default_file: PathBuf::from("packages/ui/src/translation/defaultTranslation.ts"),
            default_const: "DEFAULT_TRANSLATION".to_string(),
            keys_file: PathBuf::from("packages/ui/src/translation/TranslationKey.ts"),
            key_type_name: "TranslationKey".to_string(),
        }
    }
}
