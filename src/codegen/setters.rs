//! Constant-setter codegen: marker-bounded splice into hand-maintained files.
//!
//! Each target file declares mutable constants (`export let name = value`)
//! and carries a pair of sentinel comment lines. The region between the
//! markers is regenerated on every run: a frozen default-snapshot object,
//! a getter returning a fresh snapshot, and an updater that conditionally
//! overwrites each constant from an options object. Bytes outside the
//! marker region are preserved exactly, which is what makes the splice
//! idempotent and safe to re-run over manual edits.

use std::fs;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::config::{PipelineConfig, SetterTarget};
use crate::debug;

/// Sentinel marker opening the generated region.
pub const MARKER_START: &str = "/* ==== BEGIN AUTO-GENERATED SETTERS ==== */";
/// Sentinel marker closing the generated region.
pub const MARKER_END: &str = "/* ==== END AUTO-GENERATED SETTERS ==== */";

/// Full shape an `export let` line must have.
static EXPORT_LET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^export let (\w+) = (.+)$").unwrap());

/// Prefix that commits a line to the full pattern above.
const EXPORT_LET_PREFIX: &str = "export let ";

/// Splice every configured target file in place.
pub fn splice_all(config: &PipelineConfig) -> Result<()> {
    for target in &config.setters {
        let path = config.root_join(&target.file);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read setter target: {}", path.display()))?;

        let spliced = splice_file(target, &content)
            .with_context(|| format!("Failed to splice {}", path.display()))?;

        fs::write(&path, spliced)
            .with_context(|| format!("Failed to write setter target: {}", path.display()))?;
        debug!("setters"; "{}", target.file.display());
    }
    Ok(())
}

/// Replace the marker-bounded region of `content` with regenerated
/// boilerplate derived from the mutable constants outside it.
pub fn splice_file(target: &SetterTarget, content: &str) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let (start, end) = locate_markers(&lines)?;
    let constants = extract_constants(&lines, start, end)?;

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    out.extend(lines[..start].iter().map(|s| s.to_string()));
    out.extend(render_block(target, &constants));
    out.extend(lines[end + 1..].iter().map(|s| s.to_string()));
    Ok(out.join("\n"))
}

/// Locate the begin/end marker lines.
fn locate_markers(lines: &[&str]) -> Result<(usize, usize)> {
    let Some(start) = lines.iter().position(|line| line.contains(MARKER_START)) else {
        bail!("No {MARKER_START} marker found");
    };
    let Some(end) = lines.iter().position(|line| line.contains(MARKER_END)) else {
        bail!("No {MARKER_END} marker found");
    };
    if end < start {
        bail!("End marker appears before begin marker");
    }
    Ok((start, end))
}

/// Validate a target file without modifying it.
///
/// Locates the markers and extracts the constants, returning how many
/// were found. This is the read-only half of [`splice_file`].
pub fn verify_file(content: &str) -> Result<usize> {
    let lines: Vec<&str> = content.split('\n').collect();
    let (start, end) = locate_markers(&lines)?;
    Ok(extract_constants(&lines, start, end)?.len())
}

/// Extract mutable constant names from the lines outside the marker region.
///
/// A line that starts with the `export let ` prefix but fails the full
/// declaration pattern is a hard error rather than a silent skip.
fn extract_constants(lines: &[&str], start: usize, end: usize) -> Result<Vec<String>> {
    let outside = lines[..start].iter().chain(lines[end + 1..].iter());

    let mut constants = Vec::new();
    for line in outside {
        if !line.starts_with(EXPORT_LET_PREFIX) {
            continue;
        }
        match EXPORT_LET.captures(line) {
            Some(captures) => constants.push(captures[1].to_string()),
            None => bail!("Invalid constant line: {line}"),
        }
    }
    Ok(constants)
}

/// Render the generated region, markers included.
fn render_block(target: &SetterTarget, constants: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(constants.len() * 4 + 24);
    let visibility = if target.export { "export " } else { "" };
    let doc = |block: &mut Vec<String>| {
        if target.export {
            block.push("/** @public */".to_string());
        }
    };

    block.push(MARKER_START.to_string());
    block.push("// This section is auto-generated by assetforge.".to_string());
    block.push("// If you edit it manually, your changes will get overwritten.".to_string());
    block.push("// To regenerate it, run `assetforge refresh`.".to_string());
    block.push(String::new());

    doc(&mut block);
    block.push(format!("{visibility}const {} = {{", target.defaults));
    for constant in constants {
        block.push(format!("\t{constant},"));
    }
    block.push("} as const".to_string());
    block.push(String::new());

    doc(&mut block);
    block.push(format!("{visibility}function {}() {{", target.getter));
    block.push("\treturn {".to_string());
    for constant in constants {
        block.push(format!("\t\t{constant},"));
    }
    block.push("\t}".to_string());
    block.push("}".to_string());
    block.push(String::new());

    doc(&mut block);
    block.push(format!("{visibility}function {}(settings: {{", target.updater));
    for constant in constants {
        block.push(format!("\t{constant}?: typeof {constant},"));
    }
    block.push("}) {".to_string());
    for constant in constants {
        block.push(format!("\tif (settings.{constant} !== undefined) {{"));
        block.push(format!("\t\t{constant} = settings.{constant}"));
        block.push("\t}".to_string());
    }
    block.push("}".to_string());
    block.push(MARKER_END.to_string());
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn target(export: bool) -> SetterTarget {
        SetterTarget {
            file: PathBuf::from("settings.ts"),
            defaults: "DEFAULT_EDITOR_SETTINGS".to_string(),
            getter: "getEditorSettings".to_string(),
            updater: "updateEditorSettings".to_string(),
            export,
        }
    }

    fn sample_file() -> String {
        [
            "import { x } from './x'",
            "",
            "export let animationMs = 200",
            "export let gridSteps = 4",
            "",
            MARKER_START,
            "// stale generated content",
            MARKER_END,
            "",
        ]
        .join("\n")
    }

    #[test]
    fn test_splice_generates_all_three_artifacts() {
        let spliced = splice_file(&target(true), &sample_file()).unwrap();

        assert!(spliced.contains("export const DEFAULT_EDITOR_SETTINGS = {"));
        assert!(spliced.contains("export function getEditorSettings() {"));
        assert!(spliced.contains("export function updateEditorSettings(settings: {"));
        assert!(spliced.contains("\tanimationMs?: typeof animationMs,"));
        assert!(spliced.contains("\tif (settings.gridSteps !== undefined) {"));
        assert!(!spliced.contains("stale generated content"));
    }

    #[test]
    fn test_splice_snapshot_has_one_field_per_constant() {
        let spliced = splice_file(&target(true), &sample_file()).unwrap();
        let snapshot_start = spliced.find("DEFAULT_EDITOR_SETTINGS = {").unwrap();
        let snapshot = &spliced[snapshot_start..spliced[snapshot_start..].find("} as const").unwrap() + snapshot_start];

        let fields: Vec<&str> = snapshot
            .lines()
            .filter(|line| line.starts_with('\t'))
            .collect();
        assert_eq!(fields, vec!["\tanimationMs,", "\tgridSteps,"]);
    }

    #[test]
    fn test_splice_preserves_outside_bytes() {
        let spliced = splice_file(&target(true), &sample_file()).unwrap();
        assert!(spliced.starts_with("import { x } from './x'\n\nexport let animationMs = 200"));
        assert!(spliced.ends_with("\n"));
    }

    #[test]
    fn test_splice_is_fixed_point() {
        let target = target(true);
        let once = splice_file(&target, &sample_file()).unwrap();
        let twice = splice_file(&target, &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_without_export() {
        let spliced = splice_file(&target(false), &sample_file()).unwrap();
        assert!(spliced.contains("const DEFAULT_EDITOR_SETTINGS = {"));
        assert!(!spliced.contains("export const DEFAULT_EDITOR_SETTINGS"));
        assert!(!spliced.contains("/** @public */"));
    }

    #[test]
    fn test_verify_file_counts_constants() {
        assert_eq!(verify_file(&sample_file()).unwrap(), 2);
        assert!(verify_file("no markers here").is_err());
    }

    #[test]
    fn test_missing_start_marker_fails() {
        let content = format!("export let a = 1\n{MARKER_END}\n");
        let err = splice_file(&target(true), &content).unwrap_err();
        assert!(err.to_string().contains("BEGIN AUTO-GENERATED SETTERS"));
    }

    #[test]
    fn test_missing_end_marker_fails() {
        let content = format!("export let a = 1\n{MARKER_START}\n");
        assert!(splice_file(&target(true), &content).is_err());
    }

    #[test]
    fn test_malformed_constant_line_fails() {
        let content = [
            "export let broken",
            MARKER_START,
            MARKER_END,
        ]
        .join("\n");
        let err = splice_file(&target(true), &content).unwrap_err();
        assert!(err.to_string().contains("Invalid constant line"));
    }

    #[test]
    fn test_constants_inside_markers_ignored() {
        let content = [
            "export let real = 1",
            MARKER_START,
            "export let phantom = 2",
            MARKER_END,
        ]
        .join("\n");
        let spliced = splice_file(&target(true), &content).unwrap();
        assert!(spliced.contains("\treal,"));
        assert!(!spliced.contains("\tphantom,"));
    }
}
