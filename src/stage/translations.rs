//! Translation stage: byte-for-byte copy plus three derived source files.
//!
//! Besides mirroring the per-locale JSON files, this stage regenerates:
//! - the sorted language list (from the languages source file)
//! - the default-locale string dump
//! - the closed union type of translation keys

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;

use crate::codegen::{js_string, single_quoted, write_code_file};
use crate::config::{PipelineConfig, TranslationsConfig};
use crate::logger::ProgressLine;
use crate::manifest::{AssetCategory, AssetManifest};
use crate::utils::fs::{file_name_string, href_path, list_with_extension, stem_string};

use super::replace_category_dir;

/// One language entry from the languages source file. Field order is kept
/// as-is in generated output.
type LanguageEntry = serde_json::Map<String, Value>;

/// List qualifying translation files, sorted by file name.
pub fn scan(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    list_with_extension(
        &config.source_join(&config.translations.dir),
        &config.translations.extension,
    )
}

/// Copy all translation files, regenerate the derived source files, and
/// record one manifest entry per file.
pub fn copy(
    config: &PipelineConfig,
    files: &[PathBuf],
    manifest: &mut AssetManifest,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    let dirs: Vec<PathBuf> = config
        .destination_roots()
        .iter()
        .map(|root| replace_category_dir(root, &config.translations.dir))
        .collect::<Result<_>>()?;

    files.par_iter().try_for_each(|path| {
        let file_name = file_name_string(path);
        for dir in &dirs {
            let dest = dir.join(&file_name);
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy translation: {}", dest.display()))?;
        }
        if let Some(progress) = progress {
            progress.inc("translations");
        }
        Ok::<(), anyhow::Error>(())
    })?;

    write_derived_files(config)?;

    let dir_href = href_path(&config.translations.dir);
    for path in files {
        manifest.insert(
            AssetCategory::Translations,
            stem_string(path),
            format!("{dir_href}/{}", file_name_string(path)),
        );
    }
    Ok(())
}

/// Regenerate the language list, default dump, and key union type.
fn write_derived_files(config: &PipelineConfig) -> Result<()> {
    let translations = &config.translations;
    let source_dir = config.source_join(&translations.dir);

    let languages = read_languages(&source_dir.join(&translations.languages_source))?;
    write_code_file(
        &config.root_join(&translations.languages_file),
        &languages_module(&languages, translations),
    )?;

    let default_path = source_dir.join(format!(
        "{}.{}",
        translations.default_locale, translations.extension
    ));
    let default_translation = read_object(&default_path)?;
    write_code_file(
        &config.root_join(&translations.default_file),
        &default_translation_module(&default_translation, translations),
    )?;
    write_code_file(
        &config.root_join(&translations.keys_file),
        &translation_keys_module(&default_translation, translations),
    )?;

    Ok(())
}

/// Read and sort the language list.
///
/// Labels sort under a fixed locale-aware comparison: ASCII-transliterated,
/// case-insensitive, raw label as tiebreak. This keeps accented labels next
/// to their unaccented neighbors without an ICU dependency.
pub(crate) fn read_languages(path: &Path) -> Result<Vec<LanguageEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read language list: {}", path.display()))?;
    let mut languages: Vec<LanguageEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse language list: {}", path.display()))?;

    languages.sort_by(|a, b| {
        let (label_a, label_b) = (language_label(a), language_label(b));
        sort_key(label_a)
            .cmp(&sort_key(label_b))
            .then_with(|| label_a.cmp(label_b))
    });
    Ok(languages)
}

fn language_label(entry: &LanguageEntry) -> &str {
    entry.get("label").and_then(Value::as_str).unwrap_or_default()
}

fn sort_key(label: &str) -> String {
    deunicode::deunicode(label).to_lowercase()
}

/// Read a JSON object file, preserving key order.
pub(crate) fn read_object(path: &Path) -> Result<serde_json::Map<String, Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse translation file: {}", path.display()))
}

/// Generated module with the sorted language list.
fn languages_module(languages: &[LanguageEntry], config: &TranslationsConfig) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("/** @public */\n");
    out.push_str("export const ");
    out.push_str(&config.languages_const);
    out.push_str(" = [\n");
    for language in languages {
        out.push('\t');
        out.push_str(&serde_json::to_string(language).unwrap_or_else(|_| "{}".into()));
        out.push_str(",\n");
    }
    out.push_str("] as const\n");
    out
}

/// Generated module with the default-locale string dump.
fn default_translation_module(
    translation: &serde_json::Map<String, Value>,
    config: &TranslationsConfig,
) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("/** @internal */\n");
    out.push_str("export const ");
    out.push_str(&config.default_const);
    out.push_str(" = {\n");
    for (key, value) in translation {
        out.push('\t');
        out.push_str(&js_string(key));
        out.push_str(": ");
        out.push_str(&serde_json::to_string(value).unwrap_or_else(|_| "null".into()));
        out.push_str(",\n");
    }
    out.push_str("}\n");
    out
}

/// Generated module with the translation-key union type.
fn translation_keys_module(
    translation: &serde_json::Map<String, Value>,
    config: &TranslationsConfig,
) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("/** @public */\n");
    out.push_str("export type ");
    out.push_str(&config.key_type_name);
    out.push_str(" =");
    if translation.is_empty() {
        out.push_str(" never\n");
        return out;
    }
    out.push('\n');
    for key in translation.keys() {
        out.push_str("\t| ");
        out.push_str(&single_quoted(key));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(root: &std::path::Path) -> PipelineConfig {
        let dir = root.join("assets/translations");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("languages.json"),
            r#"[
                {"label":"Čeština","locale":"cs"},
                {"label":"English","locale":"en"},
                {"label":"dansk","locale":"da"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("main.json"),
            r#"{"action.cut":"Cut","action.copy":"Copy"}"#,
        )
        .unwrap();
        fs::write(dir.join("en.json"), r#"{"action.copy":"Copy"}"#).unwrap();

        let mut config = PipelineConfig::default();
        config.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_copy_mirrors_and_records_manifest() {
        let dir = TempDir::new().unwrap();
        let config = fixture(dir.path());
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        copy(&config, &files, &mut manifest, None).unwrap();

        let dest = dir.path().join("packages/assets/translations");
        assert!(dest.join("languages.json").exists());
        assert!(dest.join("main.json").exists());
        assert!(dest.join("en.json").exists());

        // Every copied file gets an entry, including the language list itself
        let names: Vec<_> = manifest
            .entries(AssetCategory::Translations)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["en", "languages", "main"]);
    }

    #[test]
    fn test_languages_sorted_locale_aware() {
        let dir = TempDir::new().unwrap();
        let config = fixture(dir.path());
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        copy(&config, &files, &mut manifest, None).unwrap();

        let languages = fs::read_to_string(
            dir.path().join("packages/schema/src/translations/languages.ts"),
        )
        .unwrap();

        // Čeština transliterates to "cestina": sorts before "dansk" and "English"
        let cestina = languages.find("Čeština").unwrap();
        let dansk = languages.find("dansk").unwrap();
        let english = languages.find("English").unwrap();
        assert!(cestina < dansk && dansk < english);
        assert!(languages.contains("export const LANGUAGES = ["));
    }

    #[test]
    fn test_default_translation_preserves_source_order() {
        let dir = TempDir::new().unwrap();
        let config = fixture(dir.path());
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        copy(&config, &files, &mut manifest, None).unwrap();

        let dump = fs::read_to_string(
            dir.path().join("packages/ui/src/translation/defaultTranslation.ts"),
        )
        .unwrap();

        // main.json lists cut before copy; the dump must not reorder
        let cut = dump.find("action.cut").unwrap();
        let copy_pos = dump.find("action.copy").unwrap();
        assert!(cut < copy_pos);
        assert!(dump.contains("\"action.cut\": \"Cut\","));
    }

    #[test]
    fn test_translation_keys_union() {
        let dir = TempDir::new().unwrap();
        let config = fixture(dir.path());
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        copy(&config, &files, &mut manifest, None).unwrap();

        let keys = fs::read_to_string(
            dir.path().join("packages/ui/src/translation/TranslationKey.ts"),
        )
        .unwrap();
        assert!(keys.contains("export type TranslationKey ="));
        assert!(keys.contains("\t| 'action.cut'"));
        assert!(keys.contains("\t| 'action.copy'"));
    }

    #[test]
    fn test_missing_languages_source_fails() {
        let dir = TempDir::new().unwrap();
        let config = fixture(dir.path());
        fs::remove_file(dir.path().join("assets/translations/languages.json")).unwrap();
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        assert!(copy(&config, &files, &mut manifest, None).is_err());
    }

    #[test]
    fn test_empty_default_translation_yields_never() {
        let config = TranslationsConfig::default();
        let source = translation_keys_module(&serde_json::Map::new(), &config);
        assert!(source.contains("export type TranslationKey = never"));
    }
}
