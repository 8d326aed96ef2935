//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Assetforge asset pipeline CLI
///
/// Invoked without a subcommand, runs the full refresh pipeline.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assetforge.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "assetforge.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Refresh asset packages and regenerate derived source files
    #[command(visible_alias = "r")]
    Refresh {
        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Validate pipeline inputs without writing anything
    #[command(visible_alias = "c")]
    Check {
        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },
}

impl Cli {
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Some(Commands::Check { .. }))
    }

    /// Whether the selected command asked for verbose output.
    pub const fn verbose(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Refresh { verbose: true } | Commands::Check { verbose: true })
        )
    }
}
