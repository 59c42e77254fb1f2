//! `pokedex serve`: preview a built site.

use std::path::Path;
use std::sync::Arc;

use pokedex_core::PokedexConfig;
use pokedex_site::{PreviewState, ServerConfig, start_server};
use tracing::info;

use crate::error::CliError;

/// Load the built site and serve it until `Ctrl-C`.
///
/// # Errors
///
/// Fails when the site has not been built, templates do not load, or the
/// server cannot bind.
pub async fn run(config: &PokedexConfig) -> Result<(), CliError> {
    let root = Path::new(&config.site.output_dir);
    let state = PreviewState::load(
        root,
        Path::new(&config.site.templates_dir),
        &config.site.title,
        config.site.page_size,
    )?;
    info!(
        root = %root.display(),
        entries = state.catalog.len(),
        "catalog loaded"
    );

    start_server(&ServerConfig::from(&config.preview), Arc::new(state)).await?;
    Ok(())
}
