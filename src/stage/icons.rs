//! Icon stage: optimize SVGs, mirror them into each destination, and
//! regenerate the icon-name union type.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::codegen::{js_string, write_code_file};
use crate::config::{IconsConfig, PipelineConfig};
use crate::logger::ProgressLine;
use crate::manifest::{AssetCategory, AssetManifest};
use crate::svg::optimize_svg;
use crate::utils::fs::{file_name_string, href_path, list_with_extension, stem_string};

use super::replace_category_dir;

/// List qualifying icon files, sorted by file name.
pub fn scan(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    list_with_extension(
        &config.source_join(&config.icons.dir),
        &config.icons.extension,
    )
}

/// Optimize and copy all icons, write the name list and union type, and
/// record one manifest entry per icon.
pub fn copy(
    config: &PipelineConfig,
    files: &[PathBuf],
    manifest: &mut AssetManifest,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    // Optimization dominates the stage, so it runs once, in parallel,
    // before the per-destination copy loops.
    let optimized: Vec<(String, String)> = files
        .par_iter()
        .map(|path| {
            let content = fs::read(path)
                .with_context(|| format!("Failed to read icon: {}", path.display()))?;
            let data = optimize_svg(&content)
                .with_context(|| format!("Failed to optimize icon: {}", path.display()))?;
            if let Some(progress) = progress {
                progress.inc("icons");
            }
            Ok((file_name_string(path), data))
        })
        .collect::<Result<_>>()?;

    let names: Vec<String> = files.iter().map(|path| stem_string(path)).collect();

    for root in config.destination_roots() {
        let icon_dir = replace_category_dir(&root, &config.icons.dir)?;

        optimized.par_iter().try_for_each(|(file_name, data)| {
            let dest = icon_dir.join(file_name);
            fs::write(&dest, data)
                .with_context(|| format!("Failed to write icon: {}", dest.display()))
        })?;

        let names_json = serde_json::to_string_pretty(&names)
            .context("Failed to encode icon names")?;
        let names_path = icon_dir.join(&config.icons.names_file);
        fs::write(&names_path, names_json + "\n")
            .with_context(|| format!("Failed to write {}", names_path.display()))?;
    }

    write_code_file(
        &config.root_join(&config.icons.types_file),
        &icon_types_module(&names, &config.icons),
    )?;

    let dir_href = href_path(&config.icons.dir);
    for (file_name, name) in optimized.iter().map(|(f, _)| f).zip(&names) {
        manifest.insert(
            AssetCategory::Icons,
            name.clone(),
            format!("{dir_href}/{file_name}"),
        );
    }
    Ok(())
}

/// Generated module with the icon-name union type and runtime list.
fn icon_types_module(names: &[String], config: &IconsConfig) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("/** @public */\n");
    out.push_str("export type ");
    out.push_str(&config.type_name);
    out.push_str(" =");
    if names.is_empty() {
        out.push_str(" never\n");
    } else {
        out.push('\n');
        for name in names {
            out.push_str("\t| ");
            out.push_str(&js_string(name));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str("/** @public */\n");
    out.push_str("export const ");
    out.push_str(&config.list_name);
    out.push_str(" = [\n");
    for name in names {
        out.push('\t');
        out.push_str(&js_string(name));
        out.push_str(",\n");
    }
    out.push_str("] as const\n");
    out
}
