//! Generated source file writing.
//!
//! Every generated file carries a "do not edit" banner; the constant-setter
//! splice is the one exception, since its marker-bounded region carries its
//! own comment lines inside a hand-maintained file.

pub mod declarations;
pub mod ident;
pub mod setters;
pub mod version;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Banner prepended to whole-file generated output.
pub const GENERATED_BANNER: &str = "\
// This file is automatically generated by assetforge.
// Do not edit it manually. Run `assetforge refresh` to regenerate.
";

/// Write a generated code file: banner, blank line, body.
///
/// Creates parent directories as needed. The body gets a trailing newline
/// if it lacks one, so re-running produces byte-identical files no matter
/// how the body was assembled.
pub fn write_code_file(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = String::with_capacity(GENERATED_BANNER.len() + body.len() + 2);
    content.push_str(GENERATED_BANNER);
    content.push('\n');
    content.push_str(body);
    if !content.ends_with('\n') {
        content.push('\n');
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write generated file: {}", path.display()))
}

/// JSON string literal for generated code (double-quoted, escaped).
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".into())
}

/// Single-quoted string literal for generated code.
///
/// Translation keys and version strings use single quotes in their
/// generated files; everything else goes through [`js_string`].
pub fn single_quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
