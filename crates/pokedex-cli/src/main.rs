//! `pokedex` entry point.
//!
//! ```text
//! pokedex build  PokeAPI --> bulk + detail fetch --> templates --> dist/
//! pokedex serve  dist/ + catalog.json --> axum preview server
//! ```
//!
//! Configuration comes from `pokedex.yaml` (defaults when absent), then
//! environment overrides, then command-line flags.

mod build;
mod cli;
mod error;
mod logging;
mod serve;

use clap::Parser;
use pokedex_core::{ConfigSource, PokedexConfig};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::logging::init_tracing;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or the selected command fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = PokedexConfig::load_or_default(&cli.config)?;
    cli.command.apply_overrides(&mut config);

    init_tracing(cli.log_level.as_deref(), &config.logging);
    if source == ConfigSource::Defaults {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(config = %cli.config.display(), "pokedex starting");

    match cli.command {
        Command::Build { .. } => {
            let report = build::run(&config).await?;
            info!(
                output = config.site.output_dir,
                list_pages = report.list_pages,
                entry_pages = report.entry_pages,
                missing_entries = report.missing_entries,
                "build complete"
            );
        }
        Command::Serve { .. } => serve::run(&config).await?,
    }

    Ok(())
}
