//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pokedex_core::PokedexConfig;

/// Static Pokedex site generator.
#[derive(Parser, Debug)]
#[command(
    name = "pokedex",
    about = "Build a static Pokedex site from PokeAPI and preview it locally",
    version
)]
pub struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(long, global = true, default_value = "pokedex.yaml", env = "POKEDEX_CONFIG")]
    pub config: PathBuf,

    /// Log filter (overridden by `RUST_LOG`), e.g. `debug` or `pokedex_fetch=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the catalog and write the static site
    Build {
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Maximum number of entries to fetch
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },

    /// Serve a built site with dynamic list filtering
    Serve {
        /// Directory of the built site
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Command {
    /// Write command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut PokedexConfig) {
        match self {
            Self::Build { out, limit } => {
                if let Some(out) = out {
                    config.site.output_dir = out.display().to_string();
                }
                if let Some(limit) = limit {
                    config.api.catalog_limit = *limit;
                }
            }
            Self::Serve { dir, port } => {
                if let Some(dir) = dir {
                    config.site.output_dir = dir.display().to_string();
                }
                if let Some(port) = port {
                    config.preview.port = *port;
                }
            }
        }
    }
}
