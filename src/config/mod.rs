//! Pipeline configuration management for `assetforge.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets] source tree + destinations
//! │   ├── icons      # [icons]
//! │   ├── embed_icons# [embed_icons]
//! │   ├── fonts      # [fonts] + role table
//! │   ├── translations # [translations]
//! │   ├── version    # [version]
//! │   └── setters    # [[setters]]
//! ├── error          # ConfigError
//! ├── util           # config file search
//! └── mod.rs         # PipelineConfig (this file)
//! ```
//!
//! The config file is optional: a missing `assetforge.toml` falls back to
//! the default monorepo layout with the current directory as root, so the
//! bare binary runs the whole pipeline with zero arguments.

pub mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{
    AssetsConfig, EmbedIconsConfig, FontsConfig, IconsConfig, SetterTarget, TranslationsConfig,
    VersionConfig,
};

use util::find_config_file;

use crate::cli::Cli;
use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing assetforge.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Repository root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source tree and destination package roots
    pub assets: AssetsConfig,

    /// Icon stage settings
    pub icons: IconsConfig,

    /// Embed-icon stage settings
    pub embed_icons: EmbedIconsConfig,

    /// Font stage settings and role table
    pub fonts: FontsConfig,

    /// Translation stage settings
    pub translations: TranslationsConfig,

    /// Version propagation settings
    pub version: VersionConfig,

    /// Constant-setter splice targets
    pub setters: Vec<SetterTarget>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            assets: AssetsConfig::default(),
            icons: IconsConfig::default(),
            embed_icons: EmbedIconsConfig::default(),
            fonts: FontsConfig::default(),
            translations: TranslationsConfig::default(),
            version: VersionConfig::default(),
            setters: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The repository
    /// root is the config file's parent directory; without a config file,
    /// defaults apply and the root is the current directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                let mut config = Self::default();
                config.root = std::env::current_dir()
                    .map_err(|err| ConfigError::Io(PathBuf::from("."), err))?;
                config
            }
        };

        config.validate()?;
        config.normalize();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate configuration values before running any stage.
    fn validate(&self) -> Result<()> {
        if self.assets.destinations.is_empty() {
            return Err(ConfigError::Validation(
                "assets.destinations must list at least one package root".to_string(),
            )
            .into());
        }

        for (field, extension) in [
            ("icons.extension", &self.icons.extension),
            ("embed_icons.extension", &self.embed_icons.extension),
            ("fonts.extension", &self.fonts.extension),
            ("translations.extension", &self.translations.extension),
        ] {
            if extension.is_empty() || extension.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "{field}: expected an extension without leading dot, got '{extension}'"
                ))
                .into());
            }
        }

        for (idx, target) in self.setters.iter().enumerate() {
            for (field, name) in [
                ("defaults", &target.defaults),
                ("getter", &target.getter),
                ("updater", &target.updater),
            ] {
                if !is_identifier(name) {
                    return Err(ConfigError::Validation(format!(
                        "setters[{idx}].{field}: '{name}' is not a valid identifier"
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Strip empty version targets and other degenerate entries.
    fn normalize(&mut self) {
        self.version
            .targets
            .retain(|target| !target.as_os_str().is_empty());
    }

    /// Get the repository root directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the repository root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Join a path with the asset source tree root.
    pub fn source_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(&self.assets.source).join(path)
    }

    /// Destination package roots as absolute paths.
    pub fn destination_roots(&self) -> Vec<PathBuf> {
        self.assets
            .destinations
            .iter()
            .map(|dest| self.root_join(dest))
            .collect()
    }
}

/// Whether `name` is usable as an identifier in generated code.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
