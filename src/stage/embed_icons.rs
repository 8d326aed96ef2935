//! Embed-icon stage: byte-for-byte copy into each destination.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::logger::ProgressLine;
use crate::manifest::{AssetCategory, AssetManifest};
use crate::utils::fs::{file_name_string, href_path, list_with_extension, stem_string};

use super::replace_category_dir;

/// List qualifying embed-icon files, sorted by file name.
pub fn scan(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    list_with_extension(
        &config.source_join(&config.embed_icons.dir),
        &config.embed_icons.extension,
    )
}

/// Copy all embed icons and record one manifest entry per file.
pub fn copy(
    config: &PipelineConfig,
    files: &[PathBuf],
    manifest: &mut AssetManifest,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    let dirs: Vec<PathBuf> = config
        .destination_roots()
        .iter()
        .map(|root| replace_category_dir(root, &config.embed_icons.dir))
        .collect::<Result<_>>()?;

    files.par_iter().try_for_each(|path| {
        let file_name = file_name_string(path);
        for dir in &dirs {
            let dest = dir.join(&file_name);
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy embed icon: {}", dest.display()))?;
        }
        if let Some(progress) = progress {
            progress.inc("embed-icons");
        }
        Ok::<(), anyhow::Error>(())
    })?;

    let dir_href = href_path(&config.embed_icons.dir);
    for path in files {
        manifest.insert(
            AssetCategory::EmbedIcons,
            stem_string(path),
            format!("{dir_href}/{}", file_name_string(path)),
        );
    }
    Ok(())
}
