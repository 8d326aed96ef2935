//! Pipeline stages.
//!
//! Stages run strictly in sequence (icons → embed-icons → fonts →
//! translations → declaration files → version → constant setters) because
//! the declaration generators read the manifest the copy stages populate.
//! Within a stage, per-file writes are independent and run as a parallel
//! batch. There are no retries: the first error aborts the run.

pub mod embed_icons;
pub mod fonts;
pub mod icons;
pub mod translations;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::PipelineConfig;
use crate::logger::ProgressLine;
use crate::manifest::AssetManifest;
use crate::utils::fs::replace_dir;
use crate::{codegen, debug, log};

/// Replace the destination folder for one asset category.
///
/// Deletes the category's top-level folder under `dest_root` and recreates
/// the full directory path, so files removed from the source tree never
/// survive in the output.
pub(crate) fn replace_category_dir(dest_root: &Path, dir: &Path) -> Result<PathBuf> {
    let top = dir
        .components()
        .next()
        .context("Category directory must not be empty")?;
    replace_dir(&dest_root.join(top.as_os_str()))?;

    let full = dest_root.join(dir);
    fs::create_dir_all(&full)
        .with_context(|| format!("Failed to create directory: {}", full.display()))?;
    Ok(full)
}

/// Run the full refresh pipeline.
pub fn run_refresh(config: &PipelineConfig) -> Result<()> {
    let icon_files = icons::scan(config)?;
    let embed_files = embed_icons::scan(config)?;
    let font_files = fonts::scan(config)?;
    let translation_files = translations::scan(config)?;

    let mut manifest = AssetManifest::new();
    let progress = ProgressLine::new(&[
        ("icons", icon_files.len()),
        ("embed-icons", embed_files.len()),
        ("fonts", font_files.len()),
        ("translations", translation_files.len()),
    ]);

    icons::copy(config, &icon_files, &mut manifest, Some(&progress))?;
    embed_icons::copy(config, &embed_files, &mut manifest, Some(&progress))?;
    fonts::copy(config, &font_files, &mut manifest, Some(&progress))?;
    translations::copy(config, &translation_files, &mut manifest, Some(&progress))?;
    progress.finish();

    if manifest.is_empty() {
        log!("warning"; "no assets collected, check the source tree");
    }
    debug!("manifest"; "{} entries collected", manifest.len());

    log!("codegen"; "writing asset declaration modules");
    codegen::declarations::write_all(config, &manifest)?;

    log!("codegen"; "propagating version");
    codegen::version::propagate_version(config)?;

    if !config.setters.is_empty() {
        log!("codegen"; "splicing constant setters");
        codegen::setters::splice_all(config)?;
    }

    log!("refresh"; "done");
    Ok(())
}
