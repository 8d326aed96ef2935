//! Assetforge - asset pipeline and code generator for web app asset packages.

mod cli;
mod codegen;
mod config;
mod logger;
mod manifest;
mod stage;
mod svg;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::PipelineConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose());

    let config = PipelineConfig::load(&cli)?;
    debug!("config"; "root: {}", config.get_root().display());

    if cli.is_check() {
        cli::check::run_check(&config)
    } else {
        stage::run_refresh(&config)
    }
}
