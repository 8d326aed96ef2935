//! Read-only validation of pipeline inputs.
//!
//! Runs the same scans and classifications the refresh pipeline would,
//! without writing anything: source directories, font role coverage, the
//! translation source files, the version source, and every setter target's
//! markers and constant declarations. All problems are collected and
//! reported before the command fails, unlike the refresh pipeline's
//! first-error abort.

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::codegen::{setters, version};
use crate::config::PipelineConfig;
use crate::log;
use crate::stage;
use crate::utils::fs::stem_string;

/// Validate all pipeline inputs. Fails if any problem was found.
pub fn run_check(config: &PipelineConfig) -> Result<()> {
    let mut problems = 0usize;

    problems += check_category("icons", stage::icons::scan(config));
    problems += check_category("embed-icons", stage::embed_icons::scan(config));
    problems += check_fonts(config);
    problems += check_translations(config);
    problems += check_version(config);
    problems += check_setters(config);

    if problems > 0 {
        bail!("check failed: {problems} problem(s) found");
    }
    log!("check"; "ok");
    Ok(())
}

/// Report a category scan result. Returns the number of problems.
fn check_category(label: &str, scan: Result<Vec<PathBuf>>) -> usize {
    match scan {
        Ok(files) => {
            log!("check"; "{label}: {} file(s)", files.len());
            0
        }
        Err(err) => {
            log!("error"; "{label}: {err:#}");
            1
        }
    }
}

/// Scan fonts and report every unmapped role, not just the first.
fn check_fonts(config: &PipelineConfig) -> usize {
    let files = match stage::fonts::scan(config) {
        Ok(files) => files,
        Err(err) => {
            log!("error"; "fonts: {err:#}");
            return 1;
        }
    };
    log!("check"; "fonts: {} file(s)", files.len());

    let mut problems = 0;
    for path in &files {
        let stem = stem_string(path);
        if !config.fonts.roles.contains_key(&stem) {
            log!("error"; "fonts: no role mapping for '{stem}'");
            problems += 1;
        }
    }
    problems
}

/// Scan translations and parse the two source files codegen depends on.
fn check_translations(config: &PipelineConfig) -> usize {
    let mut problems = check_category("translations", stage::translations::scan(config));

    let translations = &config.translations;
    let source_dir = config.source_join(&translations.dir);

    if let Err(err) =
        stage::translations::read_languages(&source_dir.join(&translations.languages_source))
    {
        log!("error"; "translations: {err:#}");
        problems += 1;
    }

    let default_path = source_dir.join(format!(
        "{}.{}",
        translations.default_locale, translations.extension
    ));
    if let Err(err) = stage::translations::read_object(&default_path) {
        log!("error"; "translations: {err:#}");
        problems += 1;
    }

    problems
}

/// Verify the version source exists and carries a version field.
fn check_version(config: &PipelineConfig) -> usize {
    match version::read_package_version(&config.root_join(&config.version.source)) {
        Ok(version) => {
            log!("check"; "version: {} → {} target(s)", version, config.version.targets.len());
            0
        }
        Err(err) => {
            log!("error"; "version: {err:#}");
            1
        }
    }
}

/// Verify every setter target has markers and well-formed constants.
fn check_setters(config: &PipelineConfig) -> usize {
    let mut problems = 0;
    for target in &config.setters {
        let path = config.root_join(&target.file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                log!("error"; "setters: {}: {err}", target.file.display());
                problems += 1;
                continue;
            }
        };
        match setters::verify_file(&content) {
            Ok(count) => {
                log!("check"; "setters: {}: {count} constant(s)", target.file.display());
            }
            Err(err) => {
                log!("error"; "setters: {}: {err:#}", target.file.display());
                problems += 1;
            }
        }
    }
    problems
}
