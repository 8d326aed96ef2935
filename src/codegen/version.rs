//! Version constant propagation.
//!
//! Reads the canonical package version and replicates an identical
//! `version` constant file to each dependent location.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::codegen::{single_quoted, write_code_file};
use crate::config::PipelineConfig;
use crate::debug;

/// Read the canonical version string from a package.json file.
pub fn read_package_version(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read version source: {}", path.display()))?;
    let package: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse version source: {}", path.display()))?;

    package
        .get("version")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("No version field in {}", path.display()))
}

/// Write the version constant file to every configured target.
pub fn propagate_version(config: &PipelineConfig) -> Result<()> {
    let source = config.root_join(&config.version.source);
    let version = read_package_version(&source)?;
    debug!("version"; "propagating {} to {} target(s)", version, config.version.targets.len());

    let body = format!("export const version = {}\n", single_quoted(&version));
    for target in &config.version.targets {
        write_code_file(&config.root_join(target), &body)?;
    }
    Ok(())
}
