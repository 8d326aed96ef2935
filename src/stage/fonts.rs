//! Font stage: byte-for-byte copy plus strict role classification.
//!
//! Every discovered font file must have a role in `[fonts.roles]`; an
//! unmapped font aborts the run before anything is written, so a failed
//! run leaves no partial font output behind.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::config::{FontsConfig, PipelineConfig};
use crate::log;
use crate::logger::ProgressLine;
use crate::manifest::{AssetCategory, AssetManifest};
use crate::utils::fs::{file_name_string, href_path, list_with_extension, stem_string};

use super::replace_category_dir;

/// List qualifying font files, sorted by file name.
pub fn scan(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    list_with_extension(
        &config.source_join(&config.fonts.dir),
        &config.fonts.extension,
    )
}

/// Resolve each font file to its `(role, file_name)` pair.
///
/// Fails on the first font whose base name has no role entry.
pub fn classify(files: &[PathBuf], config: &FontsConfig) -> Result<Vec<(String, String)>> {
    files
        .iter()
        .map(|path| {
            let stem = stem_string(path);
            let Some(role) = config.roles.get(&stem) else {
                log!("error"; "no font role mapping for '{stem}'");
                bail!("Unmapped font file: {}", path.display());
            };
            Ok((role.clone(), file_name_string(path)))
        })
        .collect()
}

/// Copy all fonts and record one manifest entry per file, keyed by role.
pub fn copy(
    config: &PipelineConfig,
    files: &[PathBuf],
    manifest: &mut AssetManifest,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    // Classify before touching the destination: an unmapped font must not
    // leave a half-written fonts folder behind.
    let classified = classify(files, &config.fonts)?;

    let dirs: Vec<PathBuf> = config
        .destination_roots()
        .iter()
        .map(|root| replace_category_dir(root, &config.fonts.dir))
        .collect::<Result<_>>()?;

    files.par_iter().try_for_each(|path| {
        let file_name = file_name_string(path);
        for dir in &dirs {
            let dest = dir.join(&file_name);
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy font: {}", dest.display()))?;
        }
        if let Some(progress) = progress {
            progress.inc("fonts");
        }
        Ok::<(), anyhow::Error>(())
    })?;

    let dir_href = href_path(&config.fonts.dir);
    for (role, file_name) in classified {
        manifest.insert(
            AssetCategory::Fonts,
            role,
            format!("{dir_href}/{file_name}"),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(root: &std::path::Path, fonts: &[&str]) -> PipelineConfig {
        let dir = root.join("assets/fonts");
        fs::create_dir_all(&dir).unwrap();
        for font in fonts {
            fs::write(dir.join(font), "fake font").unwrap();
        }
        let mut config = PipelineConfig::default();
        config.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_copy_mapped_fonts() {
        let dir = TempDir::new().unwrap();
        let mut config = fixture(dir.path(), &["Mono-Medium.woff2", "Serif-Medium.woff2"]);
        config
            .fonts
            .roles
            .insert("Mono-Medium".to_string(), "monospace".to_string());
        config
            .fonts
            .roles
            .insert("Serif-Medium".to_string(), "serif".to_string());
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        copy(&config, &files, &mut manifest, None).unwrap();

        assert!(
            dir.path()
                .join("packages/assets/fonts/Mono-Medium.woff2")
                .exists()
        );
        let entries = manifest.entries(AssetCategory::Fonts);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "monospace");
        assert_eq!(entries[0].href, "fonts/Mono-Medium.woff2");
    }

    #[test]
    fn test_unmapped_font_fails_without_partial_state() {
        let dir = TempDir::new().unwrap();
        let config = fixture(dir.path(), &["Rogue-Font.woff2"]);
        let files = scan(&config).unwrap();

        let mut manifest = AssetManifest::new();
        let err = copy(&config, &files, &mut manifest, None).unwrap_err();

        assert!(err.to_string().contains("Unmapped font file"));
        // No manifest entry and no destination folder was created
        assert!(manifest.entries(AssetCategory::Fonts).is_empty());
        assert!(!dir.path().join("packages/assets/fonts").exists());
    }

    #[test]
    fn test_classify_reports_first_unmapped() {
        let dir = TempDir::new().unwrap();
        let mut config = fixture(dir.path(), &["Known.woff2", "Unknown.woff2"]);
        config
            .fonts
            .roles
            .insert("Known".to_string(), "serif".to_string());
        let files = scan(&config).unwrap();

        let err = classify(&files, &config.fonts).unwrap_err();
        assert!(err.to_string().contains("Unknown.woff2"));
    }
}
